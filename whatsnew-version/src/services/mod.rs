//! 服务层模块
//!
//! 包含版本判定的业务逻辑:
//! - `bundle_metadata`: 宿主应用版本元数据来源 (可注入)
//! - `version_service`: 从元数据组装当前版本
//! - `version_store`: 已展示版本记录
//! - `presentation`: 更新说明展示判定
//! - `config_service`: 运行时配置加载
//!
//! # 服务架构
//!
//! ```text
//! ┌────────────────┐     ┌─────────────────┐
//! │ BundleMetadata │ ──▶ │ current_version │
//! └────────────────┘     └────────┬────────┘
//!                                 │ Version
//!                                 ▼
//! ┌────────────────┐     ┌─────────────────┐
//! │  VersionStore  │ ◀─▶ │  WhatsNewGate   │
//! └────────────────┘     └─────────────────┘
//! ```
//!
//! # 使用示例
//!
//! ```
//! use whatsnew_version::services::{
//!     InMemoryVersionStore, ReleaseNotes, StaticMetadata, WhatsNewGate,
//! };
//! use whatsnew_version::Version;
//!
//! let current = Version::current_in(&StaticMetadata::new(Some("1.4.2"), Some("17")));
//! let gate = WhatsNewGate::new(current, InMemoryVersionStore::new());
//!
//! let notes = vec![ReleaseNotes::new("1.4", "全新的设置页面")];
//! if let Some(entry) = gate.resolve(&notes) {
//!     assert_eq!(entry.content, "全新的设置页面");
//!     gate.mark_presented(entry);
//! }
//! assert!(gate.resolve(&notes).is_none());
//! ```

pub mod bundle_metadata;
pub mod config_service;
pub mod presentation;
pub mod version_service;
pub mod version_store;

// 重导出常用类型,简化外部引用
pub use bundle_metadata::{BundleMetadata, EnvMetadata, PackageMetadata, StaticMetadata};
pub use config_service::ConfigService;
pub use presentation::{ReleaseNotes, WhatsNewGate};
pub use version_service::current_version;
pub use version_store::{InMemoryVersionStore, VersionStore};
