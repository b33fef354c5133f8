//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `listing`, `favorites`) so
//! components depend on small focused models.

pub mod favorites;
pub mod listing;
pub mod session;
