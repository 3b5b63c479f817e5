//! Session bootstrap: resolve the signed-in patient once per mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionBootstrap` spawns [`bootstrap_session`] when it mounts. The
//! profile source, the session sink, and the notifier are all injected, so
//! this module has no knowledge of Leptos contexts or `gloo-net`.
//!
//! Every fetch failure lands in one bucket: the session is reset to signed
//! out and a single error toast is shown. A result that arrives after the
//! component unmounted is dropped without touching state.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

use crate::net::api::ProfileSource;
use crate::net::types::{FetchError, PatientProfile};
use crate::state::session::SessionSink;
use crate::state::toast::Notifier;

/// Toast text shown when the current patient cannot be resolved.
pub const FETCH_USER_FAILED_MESSAGE: &str = "Failed to fetch user. Please log in.";

/// Cancellation flag tied to a component's lifetime.
///
/// Clones share the flag. Cancelled from `on_cleanup`, which requires
/// `Send + Sync`, hence the atomic.
#[derive(Clone, Debug, Default)]
pub struct MountToken(Arc<AtomicBool>);

impl MountToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// How a bootstrap run settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Authenticated,
    SignedOut,
    /// The owner unmounted before the fetch settled.
    Dropped,
}

/// Write a settled fetch result into the session.
pub fn apply_outcome<S, N>(result: Result<PatientProfile, FetchError>, session: &S, notifier: &N) -> BootstrapOutcome
where
    S: SessionSink + ?Sized,
    N: Notifier + ?Sized,
{
    match result {
        Ok(profile) => {
            log::debug!("patient session resolved");
            session.set_authenticated(true);
            session.set_user(profile);
            BootstrapOutcome::Authenticated
        }
        Err(e) => {
            log::warn!("patient session fetch failed: {e}");
            session.set_authenticated(false);
            session.set_user(PatientProfile::empty());
            notifier.error(FETCH_USER_FAILED_MESSAGE);
            BootstrapOutcome::SignedOut
        }
    }
}

/// Fetch the current patient once and apply the result unless `token` was
/// cancelled in the meantime.
pub async fn bootstrap_session<P, S, N>(source: &P, session: &S, notifier: &N, token: &MountToken) -> BootstrapOutcome
where
    P: ProfileSource,
    S: SessionSink + ?Sized,
    N: Notifier + ?Sized,
{
    let result = source.fetch_profile().await;
    if token.is_cancelled() {
        log::debug!("session bootstrap finished after unmount; result dropped");
        return BootstrapOutcome::Dropped;
    }
    apply_outcome(result, session, notifier)
}

/// Tie one bootstrap run to the current reactive owner.
///
/// Registers an `on_cleanup` that cancels the returned token and hands back
/// the single fetch future for the caller to spawn. Disposing the owner
/// before the future settles makes it resolve to
/// [`BootstrapOutcome::Dropped`].
pub fn mount_bootstrap<P, S, N>(
    source: P,
    session: S,
    notifier: N,
) -> (MountToken, impl Future<Output = BootstrapOutcome> + 'static)
where
    P: ProfileSource + 'static,
    S: SessionSink + 'static,
    N: Notifier + 'static,
{
    let token = MountToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    let task_token = token.clone();
    let task = async move { bootstrap_session(&source, &session, &notifier, &task_token).await };
    (token, task)
}
