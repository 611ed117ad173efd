//! 结果渲染 - 业务能力层
//!
//! 只负责把接口响应转换成区域内容，不写页面

use crate::models::{AnalyzeResponse, UploadResponse};
use crate::ui::RegionContent;

/// 分析进行中的提示
pub const PROCESSING_MESSAGE: &str = "Özetleniyor, lütfen bekleyin...";

/// 关键词之间的分隔符
const KEYWORD_SEPARATOR: &str = ", ";

/// 上传结果：完整 JSON
pub fn upload_content(response: &UploadResponse) -> RegionContent {
    RegionContent::plain(response.to_pretty_json())
}

/// 处理中提示
pub fn processing_content() -> RegionContent {
    RegionContent::plain(PROCESSING_MESSAGE)
}

/// 摘要区域
pub fn summary_content(response: &AnalyzeResponse) -> RegionContent {
    RegionContent::labeled("Özet", response.ozet.as_str())
}

/// 关键词区域：RAKE 与 YAKE 各一行
pub fn keywords_content(response: &AnalyzeResponse) -> RegionContent {
    RegionContent::labeled(
        "RAKE Anahtar Kelimeler",
        response.rake_keywords.join(KEYWORD_SEPARATOR),
    )
    .with_line(
        "YAKE Anahtar Kelimeler",
        response.yake_keywords.join(KEYWORD_SEPARATOR),
    )
}

/// 分类区域：规则与模型各一行
pub fn category_content(response: &AnalyzeResponse) -> RegionContent {
    RegionContent::labeled("Kategori (Kural)", response.kategori_kural.as_str())
        .with_line("Kategori (ML)", response.kategori_ml.as_str())
}

/// 错误提示
pub fn error_content(message: impl std::fmt::Display) -> RegionContent {
    RegionContent::labeled("Hata", message.to_string())
}

/// 在已有内容后追加一行错误提示
pub fn append_error(content: RegionContent, message: impl std::fmt::Display) -> RegionContent {
    content.with_line("Hata", message.to_string())
}
