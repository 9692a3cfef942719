//! Shared types for the employee service
//!
//! Wire types used by the server and by API clients: employee models and
//! the uniform response envelope.

pub mod models;
pub mod response;

// Re-exports
pub use models::{Department, DepartmentStats, EmployeeCreate, EmployeeStats, EmployeeUpdate};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
