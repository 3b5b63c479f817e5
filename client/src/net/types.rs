//! Wire types for the patient API.
//!
//! DESIGN
//! ======
//! The profile schema belongs to the backend. The client keeps it as an
//! opaque JSON object and only requires that a successful `/me` response
//! carries a non-empty `user` object.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Failure to resolve the current patient.
///
/// Variants exist for console diagnostics only. Every variant is handled the
/// same way by the session bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("network request failed: {0}")]
    Network(String),

    /// The API answered with a non-success HTTP status.
    #[error("unexpected response status {0}")]
    Status(u16),

    /// The response body was not a `{ "user": { ... } }` object.
    #[error("malformed profile response: {0}")]
    Malformed(String),

    /// No HTTP transport in this build (server-side render).
    #[error("profile fetch unavailable outside the browser")]
    Unavailable,
}

/// Opaque patient profile as returned by the backend.
///
/// The empty object stands for "no signed-in patient".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientProfile(Map<String, Value>);

impl PatientProfile {
    /// The empty profile used while unauthenticated.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a top-level profile field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for PatientProfile {
    type Error = FetchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) if !map.is_empty() => Ok(Self(map)),
            Value::Object(_) => Err(FetchError::Malformed("`user` is an empty object".to_owned())),
            other => Err(FetchError::Malformed(format!("`user` is not an object: {other}"))),
        }
    }
}

/// Body of `GET /api/v1/user/patient/me`.
#[derive(Debug, Deserialize)]
struct MeResponse {
    user: Option<Value>,
}

/// Parse a `/me` response body into a profile.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] when the body is not JSON, lacks a
/// `user` field, or `user` is not a non-empty object.
pub fn parse_me_response(body: &str) -> Result<PatientProfile, FetchError> {
    let resp: MeResponse = serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    let user = resp.user.ok_or_else(|| FetchError::Malformed("missing `user` field".to_owned()))?;
    PatientProfile::try_from(user)
}
