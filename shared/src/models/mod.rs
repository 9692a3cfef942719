//! Data models
//!
//! Shared between employee-server and API clients.

pub mod employee;

// Re-exports
pub use employee::*;
