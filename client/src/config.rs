//! Patient API endpoint configuration.
//!
//! The frontend is compiled to WASM, so there is no process environment to
//! read at runtime. The API base URL is baked in at build time from
//! `PATIENT_API_BASE_URL` and falls back to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";
pub const PATIENT_ME_PATH: &str = "/api/v1/user/patient/me";

/// Where and how the client reaches the patient API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub profile_path: String,
    /// Attach cookies to cross-origin requests (`credentials: include`).
    pub with_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build the config from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("PATIENT_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Config pointing at `base_url`; a blank value selects the default.
    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self {
            base_url: base_url.to_owned(),
            profile_path: PATIENT_ME_PATH.to_owned(),
            with_credentials: true,
        }
    }

    /// Absolute URL of the current-patient profile endpoint.
    pub fn profile_url(&self) -> String {
        format!("{}{}", self.base_url, self.profile_path)
    }
}
