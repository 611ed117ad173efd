/// 摘要服务 API 客户端
///
/// 封装上传、提取、分析三个接口的调用逻辑
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::HttpExecutor;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ExtractRequest, ExtractResponse, UploadRequest,
    UploadResponse,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// 摘要服务能力
///
/// 流程层只依赖这个 trait，测试时可替换为假实现
#[async_trait]
pub trait SummarizerApi: Send + Sync {
    /// 上传 PDF
    async fn upload_pdf(&self, request: UploadRequest) -> AppResult<UploadResponse>;

    /// 提取文本
    async fn extract_text(&self, request: &ExtractRequest) -> AppResult<ExtractResponse>;

    /// 分析文本（摘要、关键词、分类）
    async fn analyze(&self, request: &AnalyzeRequest) -> AppResult<AnalyzeResponse>;
}

/// 基于 HTTP 的摘要服务客户端
pub struct HttpSummarizerClient {
    executor: HttpExecutor,
    upload_path: String,
    extract_path: String,
    analyze_path: String,
}

impl HttpSummarizerClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            executor: HttpExecutor::new(config)?,
            upload_path: config.upload_path.clone(),
            extract_path: config.extract_path.clone(),
            analyze_path: config.analyze_path.clone(),
        })
    }

    /// 上传表单：`file`
    fn upload_form(&self, request: UploadRequest) -> AppResult<Form> {
        let part = Part::bytes(request.bytes)
            .file_name(request.file_name)
            .mime_str("application/pdf")
            .map_err(|e| AppError::api_request_failed(&self.upload_path, e))?;
        Ok(Form::new().part("file", part))
    }

    /// 提取表单：`filename` + `method`
    fn extract_form(request: &ExtractRequest) -> Form {
        Form::new()
            .text("filename", request.filename.clone())
            .text("method", request.method.as_str().to_string())
    }

    /// 分析表单：`text`
    fn analyze_form(request: &AnalyzeRequest) -> Form {
        Form::new().text("text", request.text().to_string())
    }
}

#[async_trait]
impl SummarizerApi for HttpSummarizerClient {
    async fn upload_pdf(&self, request: UploadRequest) -> AppResult<UploadResponse> {
        debug!(
            "上传 PDF: {} ({} 字节)",
            request.file_name,
            request.bytes.len()
        );
        let raw = self
            .executor
            .post_form(&self.upload_path, self.upload_form(request)?)
            .await?;
        UploadResponse::from_value(&self.upload_path, raw)
    }

    async fn extract_text(&self, request: &ExtractRequest) -> AppResult<ExtractResponse> {
        debug!("提取文本: {} (方式: {})", request.filename, request.method);
        self.executor
            .post_form_as(&self.extract_path, Self::extract_form(request))
            .await
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> AppResult<AnalyzeResponse> {
        debug!("分析文本: {} 字符", request.text().chars().count());
        self.executor
            .post_form_as(&self.analyze_path, Self::analyze_form(request))
            .await
    }
}
