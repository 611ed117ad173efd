use crate::error::{AppError, AppResult, InputError};
use crate::models::summary::UploadRequest;
use std::path::Path;
use tokio::fs;

/// 读取 PDF 文件并构造上传请求
///
/// 扩展名必须是 `.pdf`（不区分大小写），否则返回 `InputError::NotPdf`，
/// 此时不会读取文件内容。
pub async fn load_pdf(pdf_path: &Path) -> AppResult<UploadRequest> {
    let file_name = pdf_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if !is_pdf_name(&file_name) {
        return Err(InputError::NotPdf {
            filename: file_name,
        }
        .into());
    }

    let bytes = fs::read(pdf_path)
        .await
        .map_err(|e| AppError::file_read_failed(pdf_path.display().to_string(), e))?;

    tracing::debug!("已读取 {}: {} 字节", file_name, bytes.len());

    Ok(UploadRequest::new(file_name, bytes))
}

/// 读取文本文件（用于预填可编辑文本框）
pub async fn load_text(text_path: &Path) -> AppResult<String> {
    fs::read_to_string(text_path)
        .await
        .map_err(|e| AppError::file_read_failed(text_path.display().to_string(), e))
}

fn is_pdf_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".pdf")
}
