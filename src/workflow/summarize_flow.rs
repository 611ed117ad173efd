//! 摘要流程 - 流程层
//!
//! 核心职责：定义"点击摘要按钮"的完整处理流程
//!
//! 流程顺序：
//! 1. 读取文本框，空白则弹窗并结束
//! 2. 显示处理中提示
//! 3. 分析 → 摘要 / 关键词 / 分类三个区域

use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

use crate::clients::SummarizerApi;
use crate::error::AppResult;
use crate::models::{AnalyzeRequest, AnalyzeResponse};
use crate::services::presenter;
use crate::ui::{Region, View};
use crate::workflow::action_guard::{ActionGuard, ActionKind, Ticket};
use crate::workflow::FlowOutcome;

/// 摘要流程
pub struct SummarizeFlow {
    api: Arc<dyn SummarizerApi>,
    view: Arc<dyn View>,
    guard: ActionGuard,
    last: Mutex<Option<AnalyzeResponse>>,
}

impl SummarizeFlow {
    pub fn new(api: Arc<dyn SummarizerApi>, view: Arc<dyn View>) -> Self {
        Self {
            api,
            view,
            guard: ActionGuard::new(ActionKind::Summarize),
            last: Mutex::new(None),
        }
    }

    /// 最近一次写入页面的分析结果
    pub fn last_analysis(&self) -> Option<AnalyzeResponse> {
        self.last
            .lock()
            .map(|g| g.clone())
            .unwrap_or_else(|p| p.into_inner().clone())
    }

    pub async fn run(&self) -> AppResult<FlowOutcome> {
        let request = match AnalyzeRequest::new(self.view.text_field()) {
            Ok(request) => request,
            Err(e) => {
                warn!("⚠️ {}", e);
                self.view.alert(&e.to_string());
                return Ok(FlowOutcome::Rejected);
            }
        };

        let ticket = self.guard.begin();
        match self.steps(&ticket, request).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                error!("{} ❌ 分析失败: {}", ticket, e);
                if self.guard.is_current(&ticket) {
                    self.view.show(Region::Summary, presenter::error_content(&e));
                }
                Err(e)
            }
        }
    }

    async fn steps(&self, ticket: &Ticket, request: AnalyzeRequest) -> AppResult<FlowOutcome> {
        self.view.show(Region::Summary, presenter::processing_content());
        info!(
            "{} 🔍 正在分析文本 ({} 字符) ...",
            ticket,
            request.text().chars().count()
        );

        let analysis = self.api.analyze(&request).await?;

        if !self.guard.is_current(ticket) {
            warn!("{} 已被新的点击取代，丢弃分析结果", ticket);
            return Ok(FlowOutcome::Superseded);
        }

        self.view
            .show(Region::Summary, presenter::summary_content(&analysis));
        self.view
            .show(Region::Keywords, presenter::keywords_content(&analysis));
        self.view
            .show(Region::Category, presenter::category_content(&analysis));
        info!(
            "{} ✓ 分析完成: RAKE {} 个, YAKE {} 个, 分类 {} / {}",
            ticket,
            analysis.rake_keywords.len(),
            analysis.yake_keywords.len(),
            analysis.kategori_kural,
            analysis.kategori_ml
        );

        let mut last = self.last.lock().unwrap_or_else(|p| p.into_inner());
        *last = Some(analysis);

        Ok(FlowOutcome::Completed)
    }
}
