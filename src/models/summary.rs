//! 上传 / 提取 / 分析 三个接口的请求与响应模型
//!
//! 所有实体都只在一次操作内存活

use crate::error::{ApiError, AppResult, InputError};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

/// 待上传的 PDF 文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// 文件名（作为 multipart 的 file_name 发送）
    pub file_name: String,
    /// 文件内容
    pub bytes: Vec<u8>,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// 上传接口的响应
///
/// 只有 `filename` 被后续流程使用，其余字段原样保留用于展示
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResponse {
    pub filename: String,
    pub raw: JsonValue,
}

impl UploadResponse {
    /// 从服务端 JSON 构造，缺少 `filename` 视为错误
    pub fn from_value(endpoint: &str, raw: JsonValue) -> AppResult<Self> {
        let filename = raw
            .get("filename")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ApiError::MissingField {
                endpoint: endpoint.to_string(),
                field: "filename".to_string(),
            })?
            .to_string();
        Ok(Self { filename, raw })
    }

    /// 两空格缩进的完整 JSON
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

/// 文本提取方式
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtractMethod {
    #[default]
    PyPdf2,
    /// 服务端支持的其他方式，原样透传
    Other(String),
}

impl ExtractMethod {
    pub fn as_str(&self) -> &str {
        match self {
            ExtractMethod::PyPdf2 => "pypdf2",
            ExtractMethod::Other(name) => name,
        }
    }
}

impl fmt::Display for ExtractMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pypdf2") {
            Ok(ExtractMethod::PyPdf2)
        } else {
            Ok(ExtractMethod::Other(s.to_string()))
        }
    }
}

/// 提取接口的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    pub filename: String,
    pub method: ExtractMethod,
}

/// 提取接口的响应
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
}

/// 分析接口的请求
///
/// 文本去除首尾空白后不能为空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    text: String,
}

impl AnalyzeRequest {
    /// 空白文本返回 `InputError::EmptyText`，原文不做 trim
    pub fn new(text: impl Into<String>) -> Result<Self, InputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InputError::EmptyText);
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// 分析接口的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// 摘要
    pub ozet: String,
    pub rake_keywords: Vec<String>,
    pub yake_keywords: Vec<String>,
    /// 基于规则的分类
    pub kategori_kural: String,
    /// 基于模型的分类
    pub kategori_ml: String,
}
