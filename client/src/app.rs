//! Root application component and SSR shell.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::session_bootstrap::SessionBootstrap;
use crate::state::{session::SessionState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session and toast state. The bootstrap gets write handles as
/// props; descendants that only read them use context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_read_contexts(session, toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/patient-portal.css"/>
        <Title text="Patient Portal"/>

        <SessionBootstrap session=session toasts=toasts/>
    }
}

/// Expose session and toast state to descendants without write access.
pub fn provide_read_contexts(session: RwSignal<SessionState>, toasts: RwSignal<ToastState>) {
    provide_context(session.read_only());
    provide_context(toasts.read_only());
}
