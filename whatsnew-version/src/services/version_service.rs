//! 当前版本读取
//!
//! 从宿主元数据组装当前运行版本。任何路径都返回有效版本,
//! 元数据缺失或格式错误时相应的段退化为 0。

use crate::services::bundle_metadata::{BundleMetadata, EnvMetadata};
use crate::utils::version::{parse_components, Version};
use tracing::debug;

/// 从元数据读取当前版本
///
/// - 对外版本号与构建号都存在: 对外版本号只取前三段 (major/minor/patch,
///   第四段忽略),再与构建号拼成 `major.minor.patch.build` 重新解析。
///   对外版本号省略 patch 时,构建号不会被误当作 patch。
/// - 任一缺失: 直接解析对外版本号 (缺失则为空串)。
///
/// # 示例
/// ```
/// use whatsnew_version::services::{current_version, StaticMetadata};
/// use whatsnew_version::Version;
///
/// let metadata = StaticMetadata::new(Some("1.2"), Some("7"));
/// assert_eq!(current_version(&metadata), Version::with_build(1, 2, 0, 7));
/// ```
pub fn current_version<M: BundleMetadata + ?Sized>(metadata: &M) -> Version {
    let short_version = metadata.short_version_string();
    let build_number = metadata.build_number();

    match (short_version, build_number) {
        (Some(short_version), Some(build_number)) => {
            let [major, minor, patch] = parse_components::<3>(&short_version);
            let assembled = format!("{}.{}.{}.{}", major, minor, patch, build_number);
            let version = Version::parse(&assembled);
            debug!(%short_version, %build_number, %version, "当前版本读取完成");
            version
        }
        (short_version, build_number) => {
            debug!(
                has_short_version = short_version.is_some(),
                has_build_number = build_number.is_some(),
                "版本元数据不完整,仅解析对外版本号"
            );
            Version::parse(short_version.as_deref().unwrap_or_default())
        }
    }
}

impl Version {
    /// 当前运行版本,读取进程环境变量
    /// (`WHATSNEW_SHORT_VERSION` / `WHATSNEW_BUILD_NUMBER`)
    ///
    /// 库无法得知宿主程序自身的编译期元数据。需要读取宿主 Cargo 包版本时,
    /// 在宿主 crate 中使用 [`package_metadata!`](crate::package_metadata):
    ///
    /// ```
    /// use whatsnew_version::{package_metadata, Version};
    ///
    /// let current = Version::current_in(&package_metadata!());
    /// assert_eq!(current.major_minor().build(), 0);
    /// ```
    pub fn current() -> Self {
        current_version(&EnvMetadata::default())
    }

    /// 当前运行版本,读取指定元数据来源
    pub fn current_in<M: BundleMetadata + ?Sized>(metadata: &M) -> Self {
        current_version(metadata)
    }
}
