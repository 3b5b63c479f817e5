//! Session state for the current browser patient.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the application root and handed to the session bootstrap, which
//! is the only writer. Other components read it to decide what to render.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::PatientProfile;

/// Whether a patient is signed in, and who.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user: PatientProfile,
}

impl SessionState {
    /// The flag and the profile agree: authenticated iff the profile is real.
    pub fn is_consistent(&self) -> bool {
        self.is_authenticated != self.user.is_empty()
    }
}

/// Write access to the session, injected into whoever resolves it.
pub trait SessionSink {
    fn set_authenticated(&self, authenticated: bool);
    fn set_user(&self, user: PatientProfile);
}

impl SessionSink for RwSignal<SessionState> {
    fn set_authenticated(&self, authenticated: bool) {
        self.update(|s| s.is_authenticated = authenticated);
    }

    fn set_user(&self, user: PatientProfile) {
        self.update(|s| s.user = user);
    }
}
