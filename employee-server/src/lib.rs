//! Employee Server - 员工档案 REST 服务
//!
//! # 架构概述
//!
//! 单集合文档存储之上的 CRUD HTTP API。员工记录内嵌部门子文档，
//! 支持列表、按员工号查询、唯一性约束下的创建、部分更新、删除、
//! 按部门过滤以及按部门聚合统计。
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (mem:// 或 rocksdb://)
//! - **业务服务** (`services`): 存在性检查与唯一性规则
//! - **HTTP API** (`api`): RESTful 接口与统一响应信封
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误、服务器生命周期
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务逻辑
//! ├── db/            # 数据库层
//! └── utils/         # 错误、校验、截止时间、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境
///
/// 1. 加载 `.env` (可选)
/// 2. 读取并校验配置
/// 3. 初始化日志
pub fn setup_environment() -> crate::core::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;

    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___ ___  ____  / /___  __  _____  ___
  / __/ / __ `__ \/ __ \/ / __ \/ / / / _ \/ _ \
 / /___/ / / / / / /_/ / / /_/ / /_/ /  __/  __/
/_____/_/ /_/ /_/ .___/_/\____/\__, /\___/\___/
               /_/            /____/
    "#
    );
}
