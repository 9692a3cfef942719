//! Employee API Module
//!
//! The same routes are served under the versioned prefix and the legacy
//! unversioned one.
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 员工列表 |
//! | / | POST | 创建员工 |
//! | /stats | GET | 按部门统计 |
//! | /department/{deptno} | GET | 部门员工 |
//! | /{id} | GET | 按员工号查询 |
//! | /{id} | PUT | 部分更新 |
//! | /{id} | DELETE | 删除 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/v1/employees", routes())
        .nest("/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/stats", get(handler::stats))
        .route("/department/{deptno}", get(handler::list_by_department))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
