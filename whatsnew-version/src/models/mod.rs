//! 数据模型模块
//!
//! 包含版本判定所需的数据结构:
//! - errors: 错误类型定义 (元数据读取、配置加载)
//! - bundle_info: 宿主应用 Info 字典
//! - app_config: 运行时配置 (日志、元数据来源)
//!
//! 版本号本身位于 `utils::version`,在 crate 根重导出。

pub mod app_config;
pub mod bundle_info;
pub mod errors;

// 重导出常用类型,简化外部引用
pub use app_config::AppConfig;
pub use bundle_info::{BundleInfo, BUILD_NUMBER_KEY, SHORT_VERSION_KEY};
pub use errors::{ConfigError, MetadataError};
