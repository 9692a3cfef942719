//! Repository Module
//!
//! Provides the store operations for the employee collection.

pub mod employee;

// Re-exports
pub use employee::EmployeeRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference and target table
///
/// The table name is validated as a plain identifier when the config is
/// loaded, so it is safe to interpolate into SurrealQL.
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
    table: String,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
        }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}
