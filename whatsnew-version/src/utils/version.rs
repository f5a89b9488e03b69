//! 版本比较工具
//!
//! 提供四段式版本号 (major.minor.patch.build):
//! - 版本字符串解析 (宽松,永不失败)
//! - 版本文本输出 (始终四段)
//! - 版本大小比较 (逐段按数值比较)
//!
//! # 解析规则
//!
//! 按 `.` 切分后,依次填充 major/minor/patch/build 四个位置:
//! 该位置有值且能解析为非负整数则取之,否则取 0。
//! 多出的段被忽略。因此全 0 的结果可能意味着"输入无法解析",
//! 调用方不应把它当作可区分的错误信号。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// 版本号
///
/// 不可变值对象。字段声明顺序即比较顺序,
/// 派生的 `Ord` 等价于逐段数值比较 (`10.0.0.0` > `2.0.0.0`)。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    build: u64,
}

impl Version {
    /// 创建版本号,构建号为 0
    ///
    /// # 示例
    /// ```
    /// use whatsnew_version::Version;
    ///
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3.0");
    /// ```
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::with_build(major, minor, patch, 0)
    }

    /// 创建带构建号的版本号
    ///
    /// 构建号用于区分同一 major.minor.patch 下的内部构建 (如测试分发渠道)
    pub const fn with_build(major: u64, minor: u64, patch: u64, build: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }

    /// 从字符串解析版本号 (如 "1.2.3"、"2.0"、"1.2.3.45")
    ///
    /// 缺失或非数字的段取 0,解析永不失败。
    ///
    /// # 示例
    /// ```
    /// use whatsnew_version::Version;
    ///
    /// assert_eq!(Version::parse("1.2"), Version::new(1, 2, 0));
    /// assert_eq!(Version::parse("1.2.x"), Version::new(1, 2, 0));
    /// assert_eq!(Version::parse(""), Version::default());
    /// ```
    pub fn parse(value: &str) -> Self {
        let [major, minor, patch, build] = parse_components(value);
        Self::with_build(major, minor, patch, build)
    }

    /// 主版本号
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// 次版本号
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// 修订号
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// 构建号
    pub const fn build(&self) -> u64 {
        self.build
    }

    /// 所属的 `major.minor.0.0` 发布版本
    ///
    /// 例: 1.4.2.17 → 1.4.0.0
    pub const fn major_minor(&self) -> Self {
        Self::new(self.major, self.minor, 0)
    }

    /// 转换为语义化版本
    ///
    /// 非零构建号写入构建元数据: 1.2.3.45 → `1.2.3+45`
    pub fn to_semver(&self) -> semver::Version {
        let mut version = semver::Version::new(self.major, self.minor, self.patch);
        if self.build != 0 {
            version.build = semver::BuildMetadata::new(&self.build.to_string())
                .unwrap_or(semver::BuildMetadata::EMPTY);
        }
        version
    }
}

/// 按位置解析前 N 段,缺失或非数字的段取 0
pub(crate) fn parse_components<const N: usize>(value: &str) -> [u64; N] {
    let mut components = [0; N];
    for (position, (slot, token)) in components.iter_mut().zip(value.split('.')).enumerate() {
        match token.parse::<u64>() {
            Ok(number) => *slot = number,
            Err(_) => trace!(position, token, "版本号段无法解析,按0处理"),
        }
    }
    components
}

impl fmt::Display for Version {
    /// 始终输出四段: 1.2.3 → "1.2.3.0"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.build)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&semver::Version> for Version {
    /// 构建号取自纯数字的构建元数据,否则为 0。预发布标签被忽略。
    fn from(version: &semver::Version) -> Self {
        let build = version.build.as_str().parse().unwrap_or(0);
        Self::with_build(version.major, version.minor, version.patch, build)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}
