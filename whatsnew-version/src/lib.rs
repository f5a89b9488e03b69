//! 应用版本判定
//!
//! 以四段式版本号 (major.minor.patch.build) 比较"上次看到的版本"与
//! 当前运行版本,决定是否展示更新说明 (What's New)。
//!
//! - `utils::version`: 版本号解析、输出与比较
//! - `services`: 当前版本读取、已展示记录、展示判定、配置
//! - `models`: Info 字典、配置与错误类型

pub mod models;
pub mod services;
pub mod utils;

pub use utils::version::Version;
