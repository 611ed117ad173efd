//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"提交表单并取回 JSON"的能力

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult, ConfigError};
use reqwest::multipart::Form;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

/// HTTP 执行器
///
/// 职责：
/// - 持有 `reqwest::Client` 与服务地址
/// - 暴露 post_form() 能力
/// - 不认识上传 / 提取 / 分析
/// - 不处理业务流程
#[derive(Clone)]
pub struct HttpExecutor {
    client: Client,
    base_url: String,
}

impl HttpExecutor {
    /// 按配置创建执行器
    pub fn new(config: &Config) -> AppResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ConfigError::ClientBuildFailed)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// 服务地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接完整 URL
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 以 multipart 表单 POST 并返回 JSON
    ///
    /// # 参数
    /// - `path`: 接口路径，例如 `/analyze/`
    /// - `form`: 请求体
    ///
    /// # 返回
    /// 2xx 时返回解析后的 JSON；其他状态码返回 `ApiError::BadStatus`
    pub async fn post_form(&self, path: &str, form: Form) -> AppResult<JsonValue> {
        let url = self.url_for(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        debug!("{} 返回 HTTP {}，{} 字节", path, status.as_u16(), body.len());

        if !status.is_success() {
            return Err(ApiError::BadStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
                detail: error_detail(&body),
            }
            .into());
        }

        serde_json::from_str(&body).map_err(|e| {
            ApiError::JsonParseFailed {
                endpoint: path.to_string(),
                source: e,
            }
            .into()
        })
    }

    /// 以 multipart 表单 POST 并反序列化为指定类型
    pub async fn post_form_as<T: DeserializeOwned>(&self, path: &str, form: Form) -> AppResult<T> {
        let json_value = self.post_form(path, form).await?;
        serde_json::from_value(json_value).map_err(|e| {
            ApiError::JsonParseFailed {
                endpoint: path.to_string(),
                source: e,
            }
            .into()
        })
    }
}

/// 提取错误响应中的 `detail` 字段，没有则返回原始内容
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<JsonValue>(body) {
        Ok(JsonValue::Object(map)) => match map.get("detail") {
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => body.trim().to_string(),
        },
        _ => body.trim().to_string(),
    }
}
