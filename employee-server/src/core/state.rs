use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::EmployeeRepository;
use crate::services::EmployeeService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段内部都是 Arc，Clone 成本极低，每个请求持有一份拷贝。
/// 请求之间没有共享的可变状态，唯一共享资源是存储。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | employees | EmployeeService | 员工业务服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 员工业务服务
    pub employees: EmployeeService,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let repo = EmployeeRepository::new(db.clone(), config.store_collection.as_str());
        Self {
            config,
            db,
            employees: EmployeeService::new(repo),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 校验配置
    /// 2. 打开数据库并确保集合索引 (可选写入示例数据)
    /// 3. 构造业务服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.validate()?;
        let db_service = DbService::new(config).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }
}
