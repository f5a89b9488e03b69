use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 宿主元数据读取错误
///
/// 仅在显式加载 Info 字典 (JSON 文件或字符串) 时出现。
/// 版本号本身的解析与 `Version::current` 永不失败。
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum MetadataError {
    /// Info 字典文件不存在
    #[error("Info字典文件不存在: {0}")]
    NotFound(String),

    /// I/O错误
    ///
    /// 读取 Info 字典文件时的文件系统错误
    #[error("I/O错误: {0}")]
    Io(String),

    /// 格式无效
    ///
    /// 内容不是 JSON 对象 (顶层必须是 `{ "key": value }`)
    #[error("Info字典格式无效: {0}")]
    InvalidFormat(String),
}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::NotFound => MetadataError::NotFound(err.to_string()),
            ErrorKind::PermissionDenied => MetadataError::Io(format!("权限不足: {}", err)),
            _ => MetadataError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for MetadataError {
    fn from(err: serde_json::Error) -> Self {
        MetadataError::InvalidFormat(err.to_string())
    }
}

/// 配置加载错误
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ConfigError {
    /// .env 文件存在但无法读取或解析
    #[error(".env文件加载失败: {0}")]
    EnvFile(String),

    /// 配置值无效
    #[error("配置项 {key} 的值无效: {message}")]
    InvalidValue { key: String, message: String },
}

impl From<dotenvy::Error> for ConfigError {
    fn from(err: dotenvy::Error) -> Self {
        ConfigError::EnvFile(err.to_string())
    }
}
