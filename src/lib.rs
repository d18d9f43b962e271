// 三层架构模块
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

// 重新导出主要类型
pub use domain::{
    DeletionOutcome, DeletionReport, FindDeleteError, MatchResult, PrivilegeLevel, SearchRequest,
};
pub use application::{Args, Config, RunReport};
pub use infrastructure::{ErrorLogger, ErrorType, Logger, LoggerTrait};
pub use presentation::{Console, Decision};
