//! Core building blocks shared by every command
//!
//! - **config**: updatemgr.toml parsing
//! - **context**: per-invocation context (storage root, config)
//! - **error**: error types with contextual help and exit codes

pub mod config;
pub mod context;
pub mod error;
