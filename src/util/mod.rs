//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and display rules from page and
//! component code so both can be unit-tested natively.

pub mod credentials;
pub mod format;
pub mod permissions;
pub mod storage;
