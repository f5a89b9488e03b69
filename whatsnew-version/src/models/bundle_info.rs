//! 宿主应用 Info 字典
//!
//! 以 JSON 对象保存宿主应用的元数据 (与 macOS/iOS `Info.plist` 的键名一致),
//! 版本相关只关心两个键:
//! - `CFBundleShortVersionString`: 对外版本号,如 "1.2.3"
//! - `CFBundleVersion`: 构建号,如 "45"

use crate::models::errors::MetadataError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// 对外版本号键名
pub const SHORT_VERSION_KEY: &str = "CFBundleShortVersionString";

/// 构建号键名
pub const BUILD_NUMBER_KEY: &str = "CFBundleVersion";

/// Info 字典
///
/// 值类型不限,但只有字符串值会被当作版本元数据读取;
/// 非字符串值 (如数字 `45`) 视为缺失。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundleInfo {
    entries: Map<String, Value>,
}

impl BundleInfo {
    /// 创建空字典
    pub fn new() -> Self {
        Self::default()
    }

    /// 由对外版本号与构建号创建字典
    ///
    /// # 示例
    /// ```
    /// use whatsnew_version::models::BundleInfo;
    ///
    /// let info = BundleInfo::with_versions(Some("1.2"), Some("7"));
    /// assert_eq!(info.get_str("CFBundleVersion"), Some("7"));
    /// ```
    pub fn with_versions(short_version: Option<&str>, build_number: Option<&str>) -> Self {
        let mut info = Self::new();
        if let Some(short_version) = short_version {
            info = info.insert(SHORT_VERSION_KEY, short_version);
        }
        if let Some(build_number) = build_number {
            info = info.insert(BUILD_NUMBER_KEY, build_number);
        }
        info
    }

    /// 写入键值 (构建器模式)
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// 读取字符串值,非字符串或缺失返回 None
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// 字典条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空字典
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 从 JSON 字符串解析
    ///
    /// # 错误处理
    /// 顶层不是 JSON 对象时返回 `InvalidFormat`
    pub fn from_json_str(content: &str) -> Result<Self, MetadataError> {
        let value: Value = serde_json::from_str(content)?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(MetadataError::InvalidFormat(format!(
                "顶层应为JSON对象,实际为: {}",
                json_kind(&other)
            ))),
        }
    }

    /// 从 JSON 文件加载
    ///
    /// # 错误处理
    /// - 文件不存在: `NotFound`
    /// - 读取失败: `Io`
    /// - 内容无效: `InvalidFormat`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let info = Self::from_json_str(&content)?;

        tracing::debug!(
            path = %path.display(),
            entries = info.len(),
            "Info字典加载成功"
        );

        Ok(info)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
