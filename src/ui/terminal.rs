use super::{Region, RegionContent, View};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::warn;

/// 终端页面
///
/// 每次区域更新都直接打印；文本框保存在内存中，由命令行负责读写文件
pub struct TerminalView {
    html: bool,
    text_field: Mutex<String>,
}

impl TerminalView {
    /// `html` 为真时以 HTML 片段输出区域内容
    pub fn new(html: bool) -> Self {
        Self {
            html,
            text_field: Mutex::new(String::new()),
        }
    }

    fn render(&self, content: &RegionContent) -> String {
        if self.html {
            content.to_html()
        } else {
            content.to_plain_text()
        }
    }

    /// 输出一个区域：标题行 + 内容
    fn write_region<W: Write>(
        &self,
        out: &mut W,
        region: Region,
        content: &RegionContent,
    ) -> io::Result<()> {
        writeln!(out, "── {} {}", region, "─".repeat(40))?;
        writeln!(out, "{}", self.render(content))?;
        out.flush()
    }
}

impl View for TerminalView {
    fn show(&self, region: Region, content: RegionContent) {
        let mut out = io::stdout().lock();
        if let Err(e) = self.write_region(&mut out, region, &content) {
            warn!("⚠️ 区域 {} 输出失败: {}", region, e);
        }
    }

    fn text_field(&self) -> String {
        self.text_field
            .lock()
            .map(|t| t.clone())
            .unwrap_or_else(|p| p.into_inner().clone())
    }

    fn set_text_field(&self, text: String) {
        let mut guard = self.text_field.lock().unwrap_or_else(|p| p.into_inner());
        *guard = text;
    }

    fn alert(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}
