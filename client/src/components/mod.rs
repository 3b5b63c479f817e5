//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive the state handles they write as props from the
//! application root rather than pulling them from context.

pub mod session_bootstrap;
pub mod toast_host;
