//! 工具模块
//!
//! - `version`: 四段式版本号
//! - `logger`: 日志系统初始化

pub mod logger;
pub mod version;
