/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use crate::config::Config;
use crate::workflow::FlowOutcome;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 `debug` 或 `info`。
/// 日志写到 stderr，stdout 留给页面输出。重复调用是无害的。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 论文摘要客户端");
    info!("🌐 服务地址: {}", config.base_url);
    info!("📄 提取方式: {}", config.extract_method);
    match config.request_timeout_secs {
        Some(secs) => info!("⏱️ 请求超时: {} 秒", secs),
        None => info!("⏱️ 请求超时: 不限"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录一次操作的结果
pub fn log_action_done(action: &str, outcome: FlowOutcome) {
    match outcome {
        FlowOutcome::Completed => info!("✅ {}完成", action),
        FlowOutcome::Superseded => warn!("⏭️ {}已被新的操作取代", action),
        FlowOutcome::Rejected => warn!("❌ {}未执行：输入不合法", action),
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的单行文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > max_len {
        single_line.chars().take(max_len).collect::<String>() + "..."
    } else {
        single_line
    }
}
