//! 已展示版本记录
//!
//! 记录哪些版本的更新说明已经展示过。只提供内存实现,
//! 需要持久化的宿主应用自行实现 [`VersionStore`]。

use crate::utils::version::Version;
use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// 已展示版本存储
pub trait VersionStore: Send + Sync {
    /// 记录某版本已展示
    fn save(&self, version: Version);

    /// 全部已展示版本,升序
    fn presented_versions(&self) -> Vec<Version>;

    /// 某版本是否已展示
    fn has_presented(&self, version: &Version) -> bool {
        self.presented_versions().contains(version)
    }
}

impl<S: VersionStore + ?Sized> VersionStore for &S {
    fn save(&self, version: Version) {
        (**self).save(version)
    }

    fn presented_versions(&self) -> Vec<Version> {
        (**self).presented_versions()
    }

    fn has_presented(&self, version: &Version) -> bool {
        (**self).has_presented(version)
    }
}

impl<S: VersionStore + ?Sized> VersionStore for Arc<S> {
    fn save(&self, version: Version) {
        (**self).save(version)
    }

    fn presented_versions(&self) -> Vec<Version> {
        (**self).presented_versions()
    }

    fn has_presented(&self, version: &Version) -> bool {
        (**self).has_presented(version)
    }
}

/// 内存存储
///
/// 进程退出即丢失,适合测试与无需持久化的场景。
#[derive(Debug, Default)]
pub struct InMemoryVersionStore {
    versions: RwLock<BTreeSet<Version>>,
}

impl InMemoryVersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已展示版本初始化
    pub fn with_versions(versions: impl IntoIterator<Item = Version>) -> Self {
        Self {
            versions: RwLock::new(versions.into_iter().collect()),
        }
    }

    /// 移除某版本记录,返回是否存在
    pub fn remove(&self, version: &Version) -> bool {
        self.versions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(version)
    }

    /// 清空全部记录
    pub fn clear(&self) {
        self.versions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl VersionStore for InMemoryVersionStore {
    fn save(&self, version: Version) {
        let inserted = self
            .versions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(version);
        debug!(%version, inserted, "记录已展示版本");
    }

    fn presented_versions(&self) -> Vec<Version> {
        self.versions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .copied()
            .collect()
    }

    fn has_presented(&self, version: &Version) -> bool {
        self.versions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(version)
    }
}
