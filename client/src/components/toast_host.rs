//! Toast notification host.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastPosition, ToastState};

/// How long a toast stays up before it dismisses itself.
pub const DEFAULT_AUTO_CLOSE_MS: u32 = 5_000;

/// Anchored stack of transient notifications.
///
/// Each toast closes itself after `auto_close_ms` in the browser and can be
/// dismissed early by clicking it.
#[component]
pub fn ToastHost(
    toasts: RwSignal<ToastState>,
    #[prop(optional)] position: ToastPosition,
    #[prop(default = DEFAULT_AUTO_CLOSE_MS)] auto_close_ms: u32,
) -> impl IntoView {
    let host_class = format!("toast-host {}", position.css_modifier());

    view! {
        <div class=host_class aria-live="polite">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts auto_close_ms=auto_close_ms/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>, auto_close_ms: u32) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(auto_close_ms).await;
            // The host may have been torn down while the timer ran.
            let _ = toasts.try_update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = auto_close_ms;

    let class = format!("toast {}", toast.kind.css_modifier());

    view! {
        <div class=class role="alert" on:click=move |_| toasts.update(|t| t.dismiss(id))>
            {toast.message}
        </div>
    }
}
