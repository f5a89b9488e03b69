//! 更新说明展示判定
//!
//! 对比"上次看到的版本"与当前版本,决定是否展示更新说明,
//! 并从调用方提供的更新说明列表中挑选应展示的一条。

use crate::services::version_store::VersionStore;
use crate::utils::version::Version;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 某个版本的更新说明
///
/// 内容类型由调用方决定 (标题、特性列表、富文本等)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotes<T> {
    pub version: Version,
    pub content: T,
}

impl<T> ReleaseNotes<T> {
    pub fn new(version: impl Into<Version>, content: T) -> Self {
        Self {
            version: version.into(),
            content,
        }
    }
}

/// 更新说明展示闸门
pub struct WhatsNewGate<S: VersionStore> {
    current: Version,
    store: S,
}

impl<S: VersionStore> WhatsNewGate<S> {
    pub fn new(current: Version, store: S) -> Self {
        Self { current, store }
    }

    /// 当前版本
    pub fn current(&self) -> Version {
        self.current
    }

    /// 已展示版本存储
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 当前版本是否比上次看到的版本新
    ///
    /// 从未记录过 (`None`) 视为新版本。
    pub fn is_newer_than(&self, last_seen: Option<&Version>) -> bool {
        match last_seen {
            Some(last_seen) => self.current > *last_seen,
            None => true,
        }
    }

    /// 当前版本的更新说明是否尚未展示
    pub fn should_present(&self) -> bool {
        !self.store.has_presented(&self.current)
    }

    /// 挑选应展示的更新说明
    ///
    /// 当前版本已展示过时直接返回 None,否则:
    /// 1. 版本与当前版本完全一致且未展示过的一条
    /// 2. 否则,当前版本所属 `major.minor.0.0` 发布且未展示过的一条
    ///    (例: 当前 1.4.2 时展示 1.4.0 的说明)
    /// 3. 否则不展示
    pub fn resolve<'a, T>(&self, notes: &'a [ReleaseNotes<T>]) -> Option<&'a ReleaseNotes<T>> {
        if self.store.has_presented(&self.current) {
            debug!(current = %self.current, "当前版本已展示过更新说明");
            return None;
        }

        let candidate = |version: Version| {
            notes
                .iter()
                .find(|entry| entry.version == version)
                .filter(|entry| !self.store.has_presented(&entry.version))
        };

        let resolved = candidate(self.current).or_else(|| candidate(self.current.major_minor()));
        debug!(
            current = %self.current,
            resolved = ?resolved.map(|entry| entry.version),
            "更新说明挑选完成"
        );
        resolved
    }

    /// 记录某条更新说明已展示
    pub fn mark_presented<T>(&self, notes: &ReleaseNotes<T>) {
        info!(version = %notes.version, "更新说明已展示");
        self.store.save(notes.version);
    }

    /// 记录当前版本已展示
    pub fn mark_current_presented(&self) {
        info!(version = %self.current, "更新说明已展示");
        self.store.save(self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::version_store::InMemoryVersionStore;

    fn gate(current: &str) -> WhatsNewGate<InMemoryVersionStore> {
        WhatsNewGate::new(Version::parse(current), InMemoryVersionStore::new())
    }

    fn catalog() -> Vec<ReleaseNotes<&'static str>> {
        vec![
            ReleaseNotes::new("1.3", "1.3 新功能"),
            ReleaseNotes::new("1.4", "1.4 新功能"),
            ReleaseNotes::new("1.4.2", "1.4.2 修复"),
        ]
    }

    #[test]
    fn test_is_newer_than_last_seen() {
        let gate = gate("10.0");
        assert!(gate.is_newer_than(None));
        assert!(gate.is_newer_than(Some(&Version::new(2, 0, 0))));
        assert!(!gate.is_newer_than(Some(&Version::new(10, 0, 0))));
        assert!(!gate.is_newer_than(Some(&Version::with_build(10, 0, 0, 1))));
    }

    #[test]
    fn test_should_present_until_marked() {
        let gate = gate("1.4.2");
        assert!(gate.should_present());
        gate.mark_current_presented();
        assert!(!gate.should_present());
    }

    #[test]
    fn test_resolve_exact_match() {
        let notes = catalog();
        let resolved = gate("1.4.2").resolve(&notes).unwrap();
        assert_eq!(resolved.content, "1.4.2 修复");
    }

    #[test]
    fn test_resolve_falls_back_to_major_minor() {
        let notes = catalog();
        let resolved = gate("1.4.7").resolve(&notes).unwrap();
        assert_eq!(resolved.version, Version::new(1, 4, 0));
    }

    #[test]
    fn test_resolve_skips_presented_fallback() {
        let notes = catalog();
        let gate = gate("1.4.7");
        gate.mark_presented(&notes[1]);
        assert!(gate.resolve(&notes).is_none());
    }

    #[test]
    fn test_resolve_same_version_relaunch_shows_nothing() {
        let notes = catalog();
        let store = InMemoryVersionStore::new();

        let first = WhatsNewGate::new(Version::new(1, 4, 2), &store);
        let entry = first.resolve(&notes).unwrap();
        assert_eq!(entry.version, Version::new(1, 4, 2));
        first.mark_presented(entry);
        assert!(!first.should_present());

        let relaunch = WhatsNewGate::new(Version::new(1, 4, 2), &store);
        assert!(relaunch.resolve(&notes).is_none());
    }

    #[test]
    fn test_resolve_current_presented_without_notes() {
        let notes = catalog();
        let gate = gate("1.4.7");
        gate.mark_current_presented();
        assert!(gate.resolve(&notes).is_none());
    }

    #[test]
    fn test_store_seeded_with_last_seen() {
        let last_seen = Version::parse("1.4.2");
        let same = WhatsNewGate::new(last_seen, InMemoryVersionStore::with_versions(Some(last_seen)));
        assert!(!same.is_newer_than(Some(&last_seen)));
        assert!(!same.should_present());

        let upgraded = WhatsNewGate::new(
            Version::parse("1.5"),
            InMemoryVersionStore::with_versions(Some(last_seen)),
        );
        assert!(upgraded.is_newer_than(Some(&last_seen)));
        assert!(upgraded.should_present());
    }

    #[test]
    fn test_resolve_no_matching_notes() {
        let notes = catalog();
        assert!(gate("2.0").resolve(&notes).is_none());
    }
}
