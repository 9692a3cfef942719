use thiserror::Error;

use crate::utils::AppError;

/// 启动与运行期的致命错误 (进程退出)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("存储初始化失败: {0}")]
    Store(#[from] AppError),

    #[error("端口绑定失败: {0}")]
    Bind(#[source] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// 服务器生命周期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
