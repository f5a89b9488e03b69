//! 宿主应用版本元数据来源
//!
//! `Version::current` 不直接依赖任何平台,而是通过 [`BundleMetadata`]
//! 读取两个可选字符串:
//! - 对外版本号 (等价于 `CFBundleShortVersionString`)
//! - 构建号 (等价于 `CFBundleVersion`)
//!
//! # 内置实现
//!
//! | 来源 | 说明 |
//! |------|------|
//! | [`BundleInfo`] | Info 字典 (JSON) |
//! | [`StaticMetadata`] | 固定值,供嵌入方与测试使用 |
//! | [`PackageMetadata`] | 编译期 Cargo 包版本,见 [`package_metadata!`](crate::package_metadata) |
//! | [`EnvMetadata`] | 进程环境变量 (默认来源) |
//! | `tauri::PackageInfo` | 需启用 `tauri` feature |

use crate::models::bundle_info::{BundleInfo, BUILD_NUMBER_KEY, SHORT_VERSION_KEY};
use crate::models::app_config::{AppConfig, DEFAULT_BUILD_NUMBER_ENV, DEFAULT_SHORT_VERSION_ENV};
use std::env;

/// 宿主应用版本元数据
///
/// 每次调用都是一次同步读取,实现方不应缓存或重试。
pub trait BundleMetadata: Send + Sync {
    /// 对外版本号,如 "1.2.3" 或 "1.2"
    fn short_version_string(&self) -> Option<String>;

    /// 构建号,如 "45"
    fn build_number(&self) -> Option<String>;
}

impl BundleMetadata for BundleInfo {
    fn short_version_string(&self) -> Option<String> {
        self.get_str(SHORT_VERSION_KEY).map(str::to_owned)
    }

    fn build_number(&self) -> Option<String> {
        self.get_str(BUILD_NUMBER_KEY).map(str::to_owned)
    }
}

/// 固定值元数据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMetadata {
    short_version: Option<String>,
    build_number: Option<String>,
}

impl StaticMetadata {
    pub fn new(short_version: Option<&str>, build_number: Option<&str>) -> Self {
        Self {
            short_version: short_version.map(str::to_owned),
            build_number: build_number.map(str::to_owned),
        }
    }
}

impl BundleMetadata for StaticMetadata {
    fn short_version_string(&self) -> Option<String> {
        self.short_version.clone()
    }

    fn build_number(&self) -> Option<String> {
        self.build_number.clone()
    }
}

/// Cargo 包元数据
///
/// 对外版本号取包版本去掉预发布与构建后缀 (`1.2.3-beta.1+7` → `1.2.3`),
/// 构建号由调用方在编译期提供。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageMetadata {
    package_version: &'static str,
    build_number: Option<&'static str>,
}

impl PackageMetadata {
    pub const fn new(package_version: &'static str, build_number: Option<&'static str>) -> Self {
        Self {
            package_version,
            build_number,
        }
    }
}

impl BundleMetadata for PackageMetadata {
    fn short_version_string(&self) -> Option<String> {
        let core = self
            .package_version
            .split(['-', '+'])
            .next()
            .unwrap_or_default();
        Some(core.to_string())
    }

    fn build_number(&self) -> Option<String> {
        self.build_number.map(str::to_owned)
    }
}

/// 调用方 crate 的 Cargo 包元数据
///
/// 在调用方编译期展开 `CARGO_PKG_VERSION`,构建号读取编译期环境变量
/// `WHATSNEW_BUILD_NUMBER` (可选)。
///
/// # 示例
/// ```
/// use whatsnew_version::{package_metadata, Version};
///
/// let current = Version::current_in(&package_metadata!());
/// assert_eq!(current.to_string().split('.').count(), 4);
/// ```
#[macro_export]
macro_rules! package_metadata {
    () => {
        $crate::services::bundle_metadata::PackageMetadata::new(
            env!("CARGO_PKG_VERSION"),
            option_env!("WHATSNEW_BUILD_NUMBER"),
        )
    };
}

/// 进程环境变量元数据
///
/// 默认读取 `WHATSNEW_SHORT_VERSION` 与 `WHATSNEW_BUILD_NUMBER`,
/// 由宿主应用或其启动器设置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvMetadata {
    short_version_var: String,
    build_number_var: String,
}

impl EnvMetadata {
    /// 指定两个环境变量名
    pub fn new(short_version_var: impl Into<String>, build_number_var: impl Into<String>) -> Self {
        Self {
            short_version_var: short_version_var.into(),
            build_number_var: build_number_var.into(),
        }
    }

    /// 使用配置中的环境变量名
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.short_version_env.clone(),
            config.build_number_env.clone(),
        )
    }
}

impl Default for EnvMetadata {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_VERSION_ENV, DEFAULT_BUILD_NUMBER_ENV)
    }
}

impl BundleMetadata for EnvMetadata {
    fn short_version_string(&self) -> Option<String> {
        env::var(&self.short_version_var).ok()
    }

    fn build_number(&self) -> Option<String> {
        env::var(&self.build_number_var).ok()
    }
}

#[cfg(feature = "tauri")]
impl BundleMetadata for tauri::PackageInfo {
    fn short_version_string(&self) -> Option<String> {
        let version = &self.version;
        Some(format!("{}.{}.{}", version.major, version.minor, version.patch))
    }

    fn build_number(&self) -> Option<String> {
        let build = self.version.build.as_str();
        (!build.is_empty()).then(|| build.to_string())
    }
}
