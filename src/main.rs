use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tez_ozet::utils::logging;
use tez_ozet::{App, Config, FlowOutcome, TerminalView};

/// 论文 PDF 摘要客户端
#[derive(Parser, Debug)]
#[command(name = "tez-ozet", version, about)]
struct Cli {
    /// TOML 配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 覆盖服务地址
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// 以 HTML 片段输出区域内容
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 上传 PDF 并提取文本
    Upload {
        pdf: PathBuf,
        /// 把提取出的文本保存到文件，便于编辑后再摘要
        #[arg(long)]
        save_text: Option<PathBuf>,
    },
    /// 对文本执行摘要（默认读 stdin）
    Summarize {
        #[arg(long)]
        text_file: Option<PathBuf>,
        /// 导出报告（.json 为 JSON，其余为 TXT）
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// 上传、提取、摘要一次完成
    Run {
        pdf: PathBuf,
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path).await?,
        None => Config::from_env()?,
    };
    if let Some(base_url) = cli.base_url.clone() {
        config.base_url = base_url;
    }

    // 初始化日志
    logging::init(config.verbose_logging);

    let view = Arc::new(TerminalView::new(cli.html));
    let app = App::initialize(config, view)?;

    let outcome = match cli.command {
        Command::Upload { pdf, save_text } => {
            let (outcome, text) = app.upload(&pdf).await?;
            if let (FlowOutcome::Completed, Some(path)) = (outcome, save_text) {
                tokio::fs::write(&path, text)
                    .await
                    .with_context(|| format!("无法写入文本文件: {}", path.display()))?;
            }
            outcome
        }
        Command::Summarize { text_file, export } => {
            let outcome = match text_file {
                Some(path) => app.summarize_file(&path).await?,
                None => app
                    .summarize_reader("stdin", tokio::io::stdin())
                    .await
                    .context("无法从 stdin 读取文本")?,
            };
            if let Some(path) = export {
                app.orchestrator().export(&path).await?;
            }
            outcome
        }
        Command::Run { pdf, export } => {
            let outcome = app.run(&pdf).await?;
            if let Some(path) = export {
                app.orchestrator().export(&path).await?;
            }
            outcome
        }
    };

    if outcome == FlowOutcome::Rejected {
        std::process::exit(2);
    }
    Ok(())
}
