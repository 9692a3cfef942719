use std::time::Duration;

use crate::core::ServerError;

/// 服务器配置 - 启动时从环境变量读取一次
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | STORE_URI | rocksdb://./data/employees | 存储目标 (mem:// 或 rocksdb://<path>) |
/// | STORE_NAMESPACE | empresa | SurrealDB namespace |
/// | STORE_DATABASE | empresa_db | SurrealDB database |
/// | STORE_COLLECTION | rh | 员工集合 (表名) |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | READ_TIMEOUT_MS | 5000 | 单条读取超时(毫秒) |
/// | WRITE_TIMEOUT_MS | 10000 | 写入/列表/统计超时(毫秒) |
/// | SHUTDOWN_TIMEOUT_MS | 30000 | 优雅关闭等待时间(毫秒) |
/// | SEED_DEMO_DATA | false | 空集合时写入示例数据 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，存在时按天滚动写文件 |
///
/// Unparsable numeric values fall back to their defaults.
///
/// # 示例
///
/// ```ignore
/// STORE_URI=mem:// HTTP_PORT=3000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 存储目标
    pub store_uri: String,
    pub store_namespace: String,
    pub store_database: String,
    /// 员工集合名，必须是合法标识符
    pub store_collection: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 单条读取超时 (毫秒)
    pub read_timeout_ms: u64,
    /// 写入与批量查询超时 (毫秒)
    pub write_timeout_ms: u64,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 是否写入示例数据
    pub seed_demo_data: bool,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            store_uri: std::env::var("STORE_URI")
                .unwrap_or_else(|_| "rocksdb://./data/employees".into()),
            store_namespace: std::env::var("STORE_NAMESPACE").unwrap_or_else(|_| "empresa".into()),
            store_database: std::env::var("STORE_DATABASE")
                .unwrap_or_else(|_| "empresa_db".into()),
            store_collection: std::env::var("STORE_COLLECTION").unwrap_or_else(|_| "rh".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            read_timeout_ms: std::env::var("READ_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            write_timeout_ms: std::env::var("WRITE_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(store_uri: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.store_uri = store_uri.into();
        config.http_port = http_port;
        config.seed_demo_data = false;
        config
    }

    /// 校验配置，启动时调用
    pub fn validate(&self) -> Result<(), ServerError> {
        if !is_identifier(&self.store_collection) {
            return Err(ServerError::Config(format!(
                "STORE_COLLECTION must be an identifier, got '{}'",
                self.store_collection
            )));
        }
        if self.store_namespace.trim().is_empty() || self.store_database.trim().is_empty() {
            return Err(ServerError::Config(
                "STORE_NAMESPACE and STORE_DATABASE must not be empty".into(),
            ));
        }
        if self.read_timeout_ms == 0 || self.write_timeout_ms == 0 {
            return Err(ServerError::Config(
                "READ_TIMEOUT_MS and WRITE_TIMEOUT_MS must be positive".into(),
            ));
        }
        crate::db::StoreTarget::parse(&self.store_uri).map_err(ServerError::Config)?;
        Ok(())
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_rule() {
        assert!(is_identifier("rh"));
        assert!(is_identifier("_employees2"));
        assert!(!is_identifier("2rh"));
        assert!(!is_identifier("rh; DELETE rh"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_validate() {
        let config = Config::with_overrides("mem://", 0);
        let mut bad = config.clone();
        bad.store_collection = "rh-1".into();
        assert!(matches!(bad.validate(), Err(ServerError::Config(_))));

        let mut bad = config.clone();
        bad.store_uri = "mongodb://mongodb:27017".into();
        assert!(bad.validate().is_err());

        let mut bad = config;
        bad.read_timeout_ms = 0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_durations() {
        let mut config = Config::with_overrides("mem://", 0);
        config.read_timeout_ms = 5000;
        config.write_timeout_ms = 10000;
        assert_eq!(config.read_timeout(), Duration::from_secs(5));
        assert_eq!(config.write_timeout(), Duration::from_secs(10));
    }
}
