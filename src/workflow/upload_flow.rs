//! 上传流程 - 流程层
//!
//! 核心职责：定义"提交表单"的完整处理流程
//!
//! 流程顺序：
//! 1. 上传 PDF → 原始 JSON 写入结果区域
//! 2. 按返回的文件名提取文本 → 写入可编辑文本框
//!
//! 提取失败时，错误追加在已显示的上传结果之后

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::clients::SummarizerApi;
use crate::error::AppResult;
use crate::models::{ExtractMethod, ExtractRequest, UploadRequest};
use crate::services::presenter;
use crate::ui::{Region, RegionContent, View};
use crate::utils::logging::truncate_text;
use crate::workflow::action_guard::{ActionGuard, ActionKind, Ticket};
use crate::workflow::FlowOutcome;

/// 上传流程
///
/// - 每次提交只上传一次
/// - 只有最新一次提交会写页面
pub struct UploadFlow {
    api: Arc<dyn SummarizerApi>,
    view: Arc<dyn View>,
    method: ExtractMethod,
    guard: ActionGuard,
}

impl UploadFlow {
    pub fn new(api: Arc<dyn SummarizerApi>, view: Arc<dyn View>, method: ExtractMethod) -> Self {
        Self {
            api,
            view,
            method,
            guard: ActionGuard::new(ActionKind::Upload),
        }
    }

    pub async fn run(&self, request: UploadRequest) -> AppResult<FlowOutcome> {
        let ticket = self.guard.begin();
        let mut shown = None;
        match self.steps(&ticket, request, &mut shown).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                error!("{} ❌ 处理失败: {}", ticket, e);
                if self.guard.is_current(&ticket) {
                    let content = match shown {
                        Some(upload) => presenter::append_error(upload, &e),
                        None => presenter::error_content(&e),
                    };
                    self.view.show(Region::RawResult, content);
                }
                Err(e)
            }
        }
    }

    /// `shown` 记录已写入结果区域的上传内容
    async fn steps(
        &self,
        ticket: &Ticket,
        request: UploadRequest,
        shown: &mut Option<RegionContent>,
    ) -> AppResult<FlowOutcome> {
        // ========== 步骤 1: 上传 ==========
        info!("{} 📤 正在上传 {} ...", ticket, request.file_name);
        let upload = self.api.upload_pdf(request).await?;

        if !self.guard.is_current(ticket) {
            warn!("{} 已被新的提交取代，丢弃上传结果", ticket);
            return Ok(FlowOutcome::Superseded);
        }
        info!("{} ✓ 上传完成: {}", ticket, upload.filename);
        let content = presenter::upload_content(&upload);
        self.view.show(Region::RawResult, content.clone());
        *shown = Some(content);

        // ========== 步骤 2: 提取文本 ==========
        let extract = ExtractRequest {
            filename: upload.filename,
            method: self.method.clone(),
        };
        info!("{} 📄 正在提取文本 (方式: {}) ...", ticket, extract.method);
        let extracted = self.api.extract_text(&extract).await?;

        if !self.guard.is_current(ticket) {
            warn!("{} 已被新的提交取代，丢弃提取结果", ticket);
            return Ok(FlowOutcome::Superseded);
        }
        info!(
            "{} ✓ 提取完成，{} 字符: {}",
            ticket,
            extracted.text.chars().count(),
            truncate_text(&extracted.text, 80)
        );
        self.view.set_text_field(extracted.text);

        Ok(FlowOutcome::Completed)
    }
}
