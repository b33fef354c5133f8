//! Networking modules for the sellpoint REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request plumbing, `ad_api` and `user_api` map one backend
//! resource each to async functions, `types` defines the wire records, and
//! `error` the shared failure taxonomy.

pub mod ad_api;
pub mod error;
pub mod http;
pub mod types;
pub mod user_api;
