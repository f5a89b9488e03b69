use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 默认对外版本号环境变量
pub const DEFAULT_SHORT_VERSION_ENV: &str = "WHATSNEW_SHORT_VERSION";

/// 默认构建号环境变量
pub const DEFAULT_BUILD_NUMBER_ENV: &str = "WHATSNEW_BUILD_NUMBER";

/// 运行时配置
///
/// 控制日志输出位置与级别,以及当前版本元数据的来源。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 日志目录
    ///
    /// 默认: `<数据目录>/whatsnew/logs`,无法获取数据目录时为 `./logs`
    pub log_dir: PathBuf,

    /// 默认日志级别 (RUST_LOG 未设置时生效)
    pub log_level: String,

    /// 存放对外版本号的环境变量名
    pub short_version_env: String,

    /// 存放构建号的环境变量名
    pub build_number_env: String,

    /// Info 字典 JSON 文件 (可选)
    ///
    /// 配置后优先于环境变量作为元数据来源
    pub info_file: Option<PathBuf>,
}

impl AppConfig {
    /// 设置日志目录 (构建器模式)
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    /// 设置 Info 字典文件 (构建器模式)
    pub fn with_info_file(mut self, info_file: impl Into<PathBuf>) -> Self {
        self.info_file = Some(info_file.into());
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_dir = dirs::data_local_dir()
            .map(|dir| dir.join("whatsnew").join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            log_dir,
            log_level: "info".to_string(),
            short_version_env: DEFAULT_SHORT_VERSION_ENV.to_string(),
            build_number_env: DEFAULT_BUILD_NUMBER_ENV.to_string(),
            info_file: None,
        }
    }
}
