use super::{Region, RegionContent, View};
use std::collections::HashMap;
use std::sync::Mutex;

/// 内存中的页面
///
/// 记录每个区域的最新内容、文本框和所有弹窗
#[derive(Debug, Default)]
pub struct MemoryView {
    regions: Mutex<HashMap<Region, RegionContent>>,
    text_field: Mutex<String>,
    alerts: Mutex<Vec<String>>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预填文本框
    pub fn with_text(text: impl Into<String>) -> Self {
        let view = Self::default();
        view.set_text_field(text.into());
        view
    }

    /// 区域的最新内容
    pub fn region(&self, region: Region) -> Option<RegionContent> {
        lock(&self.regions).get(&region).cloned()
    }

    /// 区域的纯文本渲染，未写入时为空串
    pub fn region_text(&self, region: Region) -> String {
        self.region(region)
            .map(|c| c.to_plain_text())
            .unwrap_or_default()
    }

    /// 所有弹窗消息
    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }
}

impl View for MemoryView {
    fn show(&self, region: Region, content: RegionContent) {
        lock(&self.regions).insert(region, content);
    }

    fn text_field(&self) -> String {
        lock(&self.text_field).clone()
    }

    fn set_text_field(&self, text: String) {
        *lock(&self.text_field) = text;
    }

    fn alert(&self, message: &str) {
        lock(&self.alerts).push(message.to_string());
    }
}

// 锁中毒时继续使用内部数据，页面状态没有需要回滚的不变量
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
