use crate::models::AppConfig;
use std::fs;
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志系统
///
/// - JSON格式文件: 便于机器解析,按天轮转
/// - 控制台: 人类可读格式,便于开发调试
/// - 环境变量控制: RUST_LOG=debug 可覆盖配置中的默认级别
///
/// # 示例日志
/// ```json
/// {
///   "timestamp": "2025-10-05T10:30:45.123Z",
///   "level": "DEBUG",
///   "target": "whatsnew_version::services::version_service",
///   "fields": {
///     "short_version": "1.2",
///     "build_number": "7",
///     "version": "1.2.0.7",
///     "message": "当前版本读取完成"
///   }
/// }
/// ```
///
/// # 重要提示
/// 返回的guard必须被调用者保存,直到应用退出。
/// 如果guard被drop,日志写入器将被关闭。
pub fn init(config: &AppConfig) -> Result<WorkerGuard, io::Error> {
    fs::create_dir_all(&config.log_dir)?;

    // 文件命名格式: whatsnew.2025-10-05.log
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("whatsnew")
        .filename_suffix("log")
        .build(&config.log_dir)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    // guard必须被保存,否则写入器会立即关闭
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let file_layer = fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false);

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    tracing::info!(log_dir = %config.log_dir.display(), "日志系统初始化完成");

    Ok(guard)
}
