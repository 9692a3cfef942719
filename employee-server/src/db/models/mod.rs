//! Database Models

// Serde helpers
pub mod serde_helpers;

pub mod employee;

// Re-exports
pub use employee::{Employee, EmployeeId};
