use super::*;
use leptos::prelude::{GetUntracked, Owner};

// =============================================================
// ToastState queue
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().is_empty());
}

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "first");
    let b = state.push(ToastKind::Error, "second");
    assert!(b > a);

    let messages: Vec<_> = state.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Info, "b");
    state.dismiss(a);

    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a");
    state.dismiss(99);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "b");
    assert_ne!(a, b);
}

// =============================================================
// CSS modifiers
// =============================================================

#[test]
fn position_default_is_top_right() {
    assert_eq!(ToastPosition::default(), ToastPosition::TopRight);
}

#[test]
fn top_center_modifier() {
    assert_eq!(ToastPosition::TopCenter.css_modifier(), "toast-host--top-center");
}

#[test]
fn error_kind_modifier() {
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
}

// =============================================================
// Notifier for RwSignal
// =============================================================

#[test]
fn signal_notifier_queues_error_toast() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        toasts.error("boom");

        let state = toasts.get_untracked();
        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].kind, ToastKind::Error);
        assert_eq!(state.toasts()[0].message, "boom");
    });
}
