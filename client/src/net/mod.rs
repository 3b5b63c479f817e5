//! Networking modules for the patient API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the wire schema and the
//! fetch error.

pub mod api;
pub mod types;
