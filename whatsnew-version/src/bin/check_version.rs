//! 当前版本检查工具
//!
//! 用法: check_version [上次看到的版本]
//!
//! 输出当前版本,以及相对上次看到的版本是否需要展示更新说明。

use std::env;
use whatsnew_version::services::{ConfigService, InMemoryVersionStore, WhatsNewGate};
use whatsnew_version::utils::logger;
use whatsnew_version::Version;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigService::load()?;
    let _guard = logger::init(&config)?;

    let metadata = ConfigService::metadata(&config);
    let current = Version::current_in(metadata.as_ref());
    println!("当前版本: {}", current);

    let last_seen = env::args().nth(1).map(Version::from);
    // 上次看到的版本视为已展示
    let gate = WhatsNewGate::new(current, InMemoryVersionStore::with_versions(last_seen));

    match last_seen {
        Some(last_seen) => println!("上次看到的版本: {}", last_seen),
        None => println!("上次看到的版本: 无记录"),
    }

    if gate.is_newer_than(last_seen.as_ref()) && gate.should_present() {
        println!("✓ 需要展示更新说明");
    } else {
        println!("✗ 无需展示更新说明");
    }

    Ok(())
}
