//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 简单健康检查 |
//! | /health/detailed | GET | 详细健康检查 (含存储探测) |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "OK",
//!   "service": "employee-server",
//!   "version": "0.1.0",
//!   "environment": "development",
//!   "timestamp": "2026-01-01T00:00:00Z"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Instant, SystemTime};

use crate::core::ServerState;

/// 健康检查路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

/// 简单健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// 运行环境
    environment: String,
    timestamp: DateTime<Utc>,
}

/// 详细健康检查响应
#[derive(Serialize)]
pub struct DetailedHealthResponse {
    /// healthy | degraded
    status: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    /// 存储检查
    database: CheckResult,
}

/// 单项检查结果
#[derive(Serialize)]
pub struct CheckResult {
    /// 状态 (ok | error)
    status: &'static str,
    /// 延迟 (毫秒)
    latency_ms: Option<u64>,
    message: Option<String>,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            message: Some(message.into()),
        }
    }
}

// 服务器启动时间 (懒加载静态变量)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

/// 记录启动时间，服务开始监听时调用
pub fn mark_started() {
    START_TIME.get_or_init(SystemTime::now);
}

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// 基础健康检查，不访问存储
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        timestamp: Utc::now(),
    })
}

/// 包含存储探测的详细健康检查
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let db_start = Instant::now();
    let probe = tokio::time::timeout(state.config.read_timeout(), state.db.query("RETURN 1")).await;
    let db_check = match probe {
        Ok(Ok(_)) => CheckResult::ok_with_latency(db_start.elapsed().as_millis() as u64),
        Ok(Err(e)) => CheckResult::error(format!("Database error: {}", e)),
        Err(_) => CheckResult::error("Database probe timed out"),
    };

    let all_ok = db_check.status == "ok";

    Json(DetailedHealthResponse {
        status: if all_ok { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        checks: HealthChecks { database: db_check },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_serialization() {
        let ok = serde_json::to_value(CheckResult::ok_with_latency(3)).unwrap();
        assert_eq!(ok["status"], "ok");
        assert_eq!(ok["latency_ms"], 3);

        let err = serde_json::to_value(CheckResult::error("down")).unwrap();
        assert_eq!(err["status"], "error");
        assert_eq!(err["message"], "down");
    }
}
