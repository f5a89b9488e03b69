use crate::models::{AppConfig, BundleInfo, ConfigError};
use crate::services::bundle_metadata::{BundleMetadata, EnvMetadata};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

/// 日志目录
const LOG_DIR_ENV: &str = "WHATSNEW_LOG_DIR";
/// 默认日志级别
const LOG_LEVEL_ENV: &str = "WHATSNEW_LOG_LEVEL";
/// 对外版本号所在环境变量名
const SHORT_VERSION_KEY_ENV: &str = "WHATSNEW_SHORT_VERSION_KEY";
/// 构建号所在环境变量名
const BUILD_NUMBER_KEY_ENV: &str = "WHATSNEW_BUILD_NUMBER_KEY";
/// Info 字典文件
const INFO_FILE_ENV: &str = "WHATSNEW_INFO_FILE";

/// 配置服务
///
/// 职责单一:
/// - 加载 .env 文件 (不存在不报错)
/// - 从 `WHATSNEW_*` 环境变量组装 `AppConfig`
/// - 按配置选择版本元数据来源
pub struct ConfigService;

impl ConfigService {
    /// 加载配置
    ///
    /// 读取当前目录 (及上层目录) 的 .env,再读取环境变量:
    /// - WHATSNEW_LOG_DIR: 日志目录
    /// - WHATSNEW_LOG_LEVEL: 默认日志级别 (默认: info)
    /// - WHATSNEW_SHORT_VERSION_KEY: 存放对外版本号的环境变量名
    /// - WHATSNEW_BUILD_NUMBER_KEY: 存放构建号的环境变量名
    /// - WHATSNEW_INFO_FILE: Info 字典 JSON 文件
    ///
    /// # 错误处理
    /// - .env 不存在: 使用进程环境,不报错
    /// - .env 存在但格式错误: `EnvFile`
    /// - 配置值为空: `InvalidValue`
    pub fn load() -> Result<AppConfig, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!(path = %path.display(), "已加载 .env 配置文件"),
            Err(err) if err.not_found() => info!("未找到 .env 文件,使用进程环境变量"),
            Err(err) => return Err(err.into()),
        }

        Self::from_env()
    }

    /// 仅从进程环境变量组装配置
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(log_dir) = read_var(LOG_DIR_ENV)? {
            config.log_dir = PathBuf::from(log_dir);
        }
        if let Some(log_level) = read_var(LOG_LEVEL_ENV)? {
            config.log_level = log_level;
        }
        if let Some(key) = read_var(SHORT_VERSION_KEY_ENV)? {
            config.short_version_env = key;
        }
        if let Some(key) = read_var(BUILD_NUMBER_KEY_ENV)? {
            config.build_number_env = key;
        }
        config.info_file = read_var(INFO_FILE_ENV)?.map(PathBuf::from);

        Ok(config)
    }

    /// 选择版本元数据来源
    ///
    /// 配置了 Info 字典文件且可读时使用该文件,
    /// 否则退回环境变量。文件读取失败只记录警告,不中断。
    pub fn metadata(config: &AppConfig) -> Box<dyn BundleMetadata> {
        if let Some(path) = &config.info_file {
            match BundleInfo::from_file(path) {
                Ok(info) => return Box::new(info),
                Err(err) => warn!(
                    path = %path.display(),
                    error = %err,
                    "Info字典加载失败,改用环境变量"
                ),
            }
        }

        Box::new(EnvMetadata::from_config(config))
    }
}

/// 读取环境变量,未设置返回 None,空值报错
fn read_var(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "值为空".to_string(),
        }),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "包含非UTF-8字符".to_string(),
        }),
    }
}
