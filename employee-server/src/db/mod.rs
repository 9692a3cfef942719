//! Database Module
//!
//! Handles the embedded SurrealDB connection and schema bootstrap

pub mod models;
pub mod repository;
pub mod seed;

use crate::core::Config;
use crate::utils::AppError;
use repository::EmployeeRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// Store connection target parsed from `STORE_URI`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// `mem://` - in-memory engine, data is lost on exit
    Memory,
    /// `rocksdb://<path>` - durable on-disk engine
    RocksDb(String),
}

impl StoreTarget {
    pub fn parse(uri: &str) -> Result<Self, String> {
        if uri == "mem://" {
            return Ok(Self::Memory);
        }
        match uri.strip_prefix("rocksdb://") {
            Some(path) if !path.is_empty() => Ok(Self::RocksDb(path.to_string())),
            Some(_) => Err("rocksdb:// store URI requires a path".to_string()),
            None => Err(format!(
                "unsupported store URI '{uri}' (expected mem:// or rocksdb://<path>)"
            )),
        }
    }
}

/// Database service, owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the store, select namespace/database and ensure the schema
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let target = StoreTarget::parse(&config.store_uri).map_err(AppError::database)?;

        let db = match &target {
            StoreTarget::Memory => Surreal::new::<Mem>(()).await,
            StoreTarget::RocksDb(path) => {
                std::fs::create_dir_all(path).map_err(|e| {
                    AppError::database(format!("Failed to create data directory {path}: {e}"))
                })?;
                Surreal::new::<RocksDb>(path.as_str()).await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(config.store_namespace.as_str())
            .use_db(config.store_database.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        tracing::info!(
            target = ?target,
            namespace = %config.store_namespace,
            database = %config.store_database,
            "Database connection established"
        );

        let repo = EmployeeRepository::new(db.clone(), config.store_collection.as_str());
        repo.ensure_schema()
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        tracing::info!(collection = %config.store_collection, "Collection schema ensured");

        if config.seed_demo_data {
            let inserted = seed::seed_if_empty(&repo)
                .await
                .map_err(|e| AppError::database(format!("Failed to seed demo data: {e}")))?;
            if inserted > 0 {
                tracing::info!(inserted, "Demo employee data loaded");
            }
        }

        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_target_parse() {
        assert_eq!(StoreTarget::parse("mem://").unwrap(), StoreTarget::Memory);
        assert_eq!(
            StoreTarget::parse("rocksdb://./data/employees").unwrap(),
            StoreTarget::RocksDb("./data/employees".to_string())
        );
        assert!(StoreTarget::parse("rocksdb://").is_err());
        assert!(StoreTarget::parse("mongodb://localhost:27017").is_err());
    }

    #[tokio::test]
    async fn test_rocksdb_store_persists() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::with_overrides("mem://", 0);
        config.store_uri = format!("rocksdb://{}", tmp.path().join("db").display());

        let service = DbService::new(&config).await.unwrap();
        let repo = EmployeeRepository::new(service.db.clone(), config.store_collection.as_str());
        assert_eq!(repo.count_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_on_startup() {
        let mut config = Config::with_overrides("mem://", 0);
        config.seed_demo_data = true;

        let service = DbService::new(&config).await.unwrap();
        let repo = EmployeeRepository::new(service.db, config.store_collection.as_str());
        assert_eq!(repo.count_all().await.unwrap(), seed::DEMO_EMPLOYEES.len() as u64);
    }
}
