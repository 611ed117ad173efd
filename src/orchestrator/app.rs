//! 命令行会话 - 编排层
//!
//! ## 职责
//!
//! 本模块是命令行的入口，负责按配置组装客户端、页面和编排器，
//! 并按子命令驱动两个入口。
//!
//! ## 设计特点
//!
//! - **资源所有者**：唯一创建 HTTP 客户端的模块
//! - **向下委托**：具体步骤交给 `Orchestrator`

use crate::clients::HttpSummarizerClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{load_text, ExtractMethod};
use crate::orchestrator::form_handlers::Orchestrator;
use crate::ui::View;
use crate::utils::logging::{log_action_done, log_startup};
use crate::workflow::FlowOutcome;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    orchestrator: Orchestrator,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config, view: Arc<dyn View>) -> AppResult<Self> {
        log_startup(&config);

        let api = Arc::new(HttpSummarizerClient::new(&config)?);
        let method: ExtractMethod = config
            .extract_method
            .parse()
            .unwrap_or_default();
        let orchestrator = Orchestrator::new(api, view, method);

        Ok(Self {
            config,
            orchestrator,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// 上传并提取，返回文本框内容
    pub async fn upload(&self, pdf_path: &Path) -> AppResult<(FlowOutcome, String)> {
        let outcome = self.orchestrator.submit_form(Some(pdf_path)).await?;
        log_action_done("上传", outcome);
        Ok((outcome, self.orchestrator.view().text_field()))
    }

    /// 预填文本框后执行摘要
    ///
    /// `text` 为 `None` 时沿用文本框现有内容
    pub async fn summarize(&self, text: Option<String>) -> AppResult<FlowOutcome> {
        if let Some(text) = text {
            self.orchestrator.view().set_text_field(text);
        }
        let outcome = self.orchestrator.click_summarize().await?;
        log_action_done("摘要", outcome);
        Ok(outcome)
    }

    /// 从文件读取文本后执行摘要
    pub async fn summarize_file(&self, text_path: &Path) -> AppResult<FlowOutcome> {
        info!("📁 读取文本: {}", text_path.display());
        let text = load_text(text_path).await?;
        self.summarize(Some(text)).await
    }

    /// 读完整个输入流（如 stdin）后执行摘要
    pub async fn summarize_reader<R>(&self, source: &str, mut reader: R) -> AppResult<FlowOutcome>
    where
        R: AsyncRead + Unpin,
    {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .await
            .map_err(|e| AppError::file_read_failed(source, e))?;
        self.summarize(Some(text)).await
    }

    /// 上传、提取、摘要一次完成
    pub async fn run(&self, pdf_path: &Path) -> AppResult<FlowOutcome> {
        let (outcome, _) = self.upload(pdf_path).await?;
        if outcome != FlowOutcome::Completed {
            return Ok(outcome);
        }
        self.summarize(None).await
    }
}
