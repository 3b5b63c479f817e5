//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep lifecycle logic out of components so it can be
//! exercised without a browser.

pub mod bootstrap;
