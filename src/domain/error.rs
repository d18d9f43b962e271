use std::path::PathBuf;

use thiserror::Error;

/// 领域层错误
#[derive(Debug, Error)]
pub enum FindDeleteError {
    /// 请求无效 (没有模式、空模式、目录不存在等)，属于致命错误
    #[error("无效请求: {0}")]
    InvalidRequest(String),

    /// 单个搜索模式失败，不影响其他模式
    #[error("搜索模式 '{pattern}' 失败: {cause}")]
    SearchFailed { pattern: String, cause: String },

    /// 单个文件重命名失败
    #[error("重命名失败 {path}: {source}")]
    RenameFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 版本目录交换失败
    #[error("交换失败: {0}")]
    SwapFailed(String),
}

pub type Result<T> = std::result::Result<T, FindDeleteError>;
