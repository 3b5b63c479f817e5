//! REST API helpers for communicating with the patient API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`FetchError::Unavailable`] since the
//! session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed profile fetch
//! degrades to the unauthenticated UI without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{FetchError, PatientProfile};
use crate::config::ApiConfig;

/// Something that can resolve the current patient's profile.
///
/// The session bootstrap depends on this seam rather than on `gloo-net`
/// directly, so it can be driven by fakes in tests.
pub trait ProfileSource {
    fn fetch_profile(&self) -> impl Future<Output = Result<PatientProfile, FetchError>>;
}

/// [`ProfileSource`] backed by `GET {base_url}/api/v1/user/patient/me`.
#[derive(Clone, Debug, Default)]
pub struct HttpProfileSource {
    config: ApiConfig,
}

impl HttpProfileSource {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl ProfileSource for HttpProfileSource {
    fn fetch_profile(&self) -> impl Future<Output = Result<PatientProfile, FetchError>> {
        fetch_current_patient(&self.config)
    }
}

/// Browser credential mode for cross-origin API calls.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CredentialsMode {
    Include,
    SameOrigin,
}

#[cfg(any(test, feature = "hydrate"))]
fn credentials_mode(config: &ApiConfig) -> CredentialsMode {
    if config.with_credentials { CredentialsMode::Include } else { CredentialsMode::SameOrigin }
}

/// Fetch the currently authenticated patient.
///
/// # Errors
///
/// Returns a [`FetchError`] on transport failure, a non-2xx status, a body
/// that is not `{ "user": { ... } }`, or when called outside the browser.
pub async fn fetch_current_patient(config: &ApiConfig) -> Result<PatientProfile, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let credentials = match credentials_mode(config) {
            CredentialsMode::Include => web_sys::RequestCredentials::Include,
            CredentialsMode::SameOrigin => web_sys::RequestCredentials::SameOrigin,
        };
        let resp = gloo_net::http::Request::get(&config.profile_url())
            .credentials(credentials)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
        super::types::parse_me_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(FetchError::Unavailable)
    }
}
