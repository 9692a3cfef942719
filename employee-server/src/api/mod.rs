//! API 路由模块
//!
//! # 结构
//!
//! - [`employees`] - 员工管理接口 (`/api/v1/employees` 与 `/employees`)
//! - [`health`] - 健康检查
//! - [`middleware`] - 请求日志

pub mod employees;
pub mod health;
pub mod middleware;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

use crate::core::ServerState;

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_app() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
pub fn build_router(state: ServerState) -> Router {
    let x_request_id = HeaderName::from_static("x-request-id");

    build_app().with_state(state).layer(
        // 自上而下执行: 先分配请求 ID，日志中间件才能读到
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(x_request_id.clone(), XRequestId))
            .layer(PropagateRequestIdLayer::new(x_request_id))
            .layer(axum_middleware::from_fn(middleware::logging_middleware))
            .layer(CorsLayer::permissive()),
    )
}
