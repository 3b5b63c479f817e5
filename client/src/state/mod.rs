//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`) so components depend on
//! small focused models. Each model also exposes the narrow write seam
//! (`SessionSink`, `Notifier`) that producers receive by injection.

pub mod session;
pub mod toast;
