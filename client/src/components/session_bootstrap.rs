//! Resolves the signed-in patient when the app mounts.

use leptos::prelude::*;

use crate::components::toast_host::ToastHost;
use crate::config::ApiConfig;
use crate::state::session::SessionState;
use crate::state::toast::{ToastPosition, ToastState};

/// Fetches `/api/v1/user/patient/me` once per mount and writes the result
/// into `session`. Failures reset the session and queue an error toast.
///
/// Renders nothing but the toast host.
#[component]
pub fn SessionBootstrap(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    #[prop(optional)] config: Option<ApiConfig>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let source = crate::net::api::HttpProfileSource::new(config.unwrap_or_else(ApiConfig::from_build_env));
        let (_token, task) = crate::util::bootstrap::mount_bootstrap(source, session, toasts);
        leptos::task::spawn_local(async move {
            task.await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, config);
    }

    view! { <ToastHost toasts=toasts position=ToastPosition::TopCenter/> }
}
