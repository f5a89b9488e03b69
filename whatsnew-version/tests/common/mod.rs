//! 测试公共模块
//!
//! 提供Mock元数据来源,记录读取次数。

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use whatsnew_version::services::BundleMetadata;

/// Mock 宿主元数据
pub struct MockBundle {
    short_version: Option<String>,
    build_number: Option<String>,
    /// 读取次数 (两个字段合计)
    reads: AtomicUsize,
}

impl MockBundle {
    pub fn new(short_version: Option<&str>, build_number: Option<&str>) -> Self {
        Self {
            short_version: short_version.map(str::to_owned),
            build_number: build_number.map(str::to_owned),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl BundleMetadata for MockBundle {
    fn short_version_string(&self) -> Option<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.short_version.clone()
    }

    fn build_number(&self) -> Option<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.build_number.clone()
    }
}
