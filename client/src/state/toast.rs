//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Toasts are a plain queue in a signal. Producers push through the
//! [`Notifier`] seam; the `ToastHost` component renders the queue and
//! removes entries when they expire or are clicked.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::{RwSignal, Update};

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// Screen anchor for the toast stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::TopLeft => "toast-host--top-left",
            Self::TopCenter => "toast-host--top-center",
            Self::TopRight => "toast-host--top-right",
            Self::BottomLeft => "toast-host--bottom-left",
            Self::BottomCenter => "toast-host--bottom-center",
            Self::BottomRight => "toast-host--bottom-right",
        }
    }
}

/// A single queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Currently visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// User-visible notification sink.
pub trait Notifier {
    fn error(&self, message: &str);
}

impl Notifier for RwSignal<ToastState> {
    fn error(&self, message: &str) {
        self.update(|t| {
            t.push(ToastKind::Error, message);
        });
    }
}
