//! 页面事件处理器 - 编排层
//!
//! ## 职责
//!
//! 把两个入口（表单提交、摘要按钮）绑定到同一个页面和同一个 API 上。
//!
//! ## 核心功能
//!
//! 1. **文件选择校验**：未选择文件或不是 PDF 时弹窗，不发请求
//! 2. **流程调度**：委托 `UploadFlow` / `SummarizeFlow`
//! 3. **结果导出**：把最近一次分析结果写入文件

use crate::clients::SummarizerApi;
use crate::error::{AppError, AppResult, InputError};
use crate::models::{load_pdf, AnalyzeResponse, ExtractMethod};
use crate::services::{presenter, ReportFormat, ReportWriter};
use crate::ui::{Region, View};
use crate::workflow::{FlowOutcome, SummarizeFlow, UploadFlow};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 上传 → 提取 → 分析 编排器
pub struct Orchestrator {
    view: Arc<dyn View>,
    upload_flow: UploadFlow,
    summarize_flow: SummarizeFlow,
}

impl Orchestrator {
    pub fn new(api: Arc<dyn SummarizerApi>, view: Arc<dyn View>, method: ExtractMethod) -> Self {
        Self {
            upload_flow: UploadFlow::new(api.clone(), view.clone(), method),
            summarize_flow: SummarizeFlow::new(api, view.clone()),
            view,
        }
    }

    /// 当前页面
    pub fn view(&self) -> &Arc<dyn View> {
        &self.view
    }

    /// 入口 A：提交表单
    ///
    /// # 参数
    /// - `selected`: 文件选择框中的文件，未选择时为 `None`
    ///
    /// # 返回
    /// 输入不合法时返回 `FlowOutcome::Rejected`（已弹窗）
    pub async fn submit_form(&self, selected: Option<&Path>) -> AppResult<FlowOutcome> {
        let Some(path) = selected else {
            return Ok(self.reject(InputError::NoFileSelected));
        };

        let request = match load_pdf(path).await {
            Ok(request) => request,
            Err(AppError::Input(e)) => return Ok(self.reject(e)),
            Err(e) => {
                self.view
                    .show(Region::RawResult, presenter::error_content(&e));
                return Err(e);
            }
        };

        self.upload_flow.run(request).await
    }

    /// 入口 B：点击摘要按钮
    pub async fn click_summarize(&self) -> AppResult<FlowOutcome> {
        self.summarize_flow.run().await
    }

    /// 最近一次分析结果
    pub fn last_analysis(&self) -> Option<AnalyzeResponse> {
        self.summarize_flow.last_analysis()
    }

    /// 导出最近一次分析结果
    ///
    /// 还没有分析结果时返回 `None`
    pub async fn export(&self, path: &Path) -> AppResult<Option<ReportFormat>> {
        let Some(analysis) = self.last_analysis() else {
            warn!("⚠️ 没有可导出的分析结果");
            return Ok(None);
        };
        let format = ReportWriter::write(path, &analysis).await?;
        info!("💾 已导出 {:?} 报告: {}", format, path.display());
        Ok(Some(format))
    }

    fn reject(&self, e: InputError) -> FlowOutcome {
        warn!("⚠️ {}", e);
        self.view.alert(&e.to_string());
        FlowOutcome::Rejected
    }
}
