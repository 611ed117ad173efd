//! 报告导出服务 - 业务能力层
//!
//! 只负责把一次分析结果写成 TXT 或 JSON 文件

use crate::error::{AppError, AppResult};
use crate::models::AnalyzeResponse;
use chrono::{DateTime, Local};
use serde_json::{json, Value as JsonValue};
use std::path::Path;
use tracing::debug;

/// 报告落款
const REPORT_CREATOR: &str = "Türkçe Tez Özetleyici API";

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Txt,
    Json,
}

impl ReportFormat {
    /// 按扩展名选择格式，`.json` 以外一律为 TXT
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Txt,
        }
    }
}

/// 报告导出服务
pub struct ReportWriter;

impl ReportWriter {
    /// 写入报告文件，格式由扩展名决定
    pub async fn write(path: &Path, response: &AnalyzeResponse) -> AppResult<ReportFormat> {
        let format = ReportFormat::from_path(path);
        let now = Local::now();
        let content = match format {
            ReportFormat::Txt => Self::render_txt(response, now),
            ReportFormat::Json => {
                let value = Self::render_json(response, now);
                serde_json::to_string_pretty(&value)
                    .map_err(|e| AppError::Other(format!("JSON 序列化失败: {}", e)))?
            }
        };

        debug!("导出报告: {} ({:?}, {} 字节)", path.display(), format, content.len());

        tokio::fs::write(path, content)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(format)
    }

    /// 纯文本报告
    pub fn render_txt(response: &AnalyzeResponse, created_at: DateTime<Local>) -> String {
        format!(
            "TEZ ÖZETİ\n{rule}\n\n📝 ÖZET:\n{ozet}\n\n🔑 ANAHTAR KELİMELER:\n• RAKE: {rake}\n• YAKE: {yake}\n\n🏷️ KATEGORİ:\n• Kural: {kural}\n• ML: {ml}\n\n📅 Oluşturulma Tarihi: {date}\n🛠️  Oluşturan: {creator}\n",
            rule = "=".repeat(50),
            ozet = response.ozet,
            rake = response.rake_keywords.join(", "),
            yake = response.yake_keywords.join(", "),
            kural = response.kategori_kural,
            ml = response.kategori_ml,
            date = created_at.format("%d.%m.%Y %H:%M:%S"),
            creator = REPORT_CREATOR,
        )
    }

    /// JSON 报告：分析字段 + 导出元信息
    pub fn render_json(response: &AnalyzeResponse, created_at: DateTime<Local>) -> JsonValue {
        json!({
            "ozet": response.ozet,
            "rake_keywords": response.rake_keywords,
            "yake_keywords": response.yake_keywords,
            "kategori_kural": response.kategori_kural,
            "kategori_ml": response.kategori_ml,
            "disarı_aktarma_tarihi": created_at.to_rfc3339(),
            "biçim": "JSON",
            "sürüm": "1.0",
        })
    }
}
