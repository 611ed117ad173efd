//! 展示层
//!
//! 页面上的各个区域通过 `View` trait 注入，流程层不做任何全局查找。
//!
//! - `Region` - 只读的展示区域
//! - `RegionContent` - 区域内容（带粗体标签的若干行）
//! - `MemoryView` - 内存实现，用于测试和无界面场景
//! - `TerminalView` - 终端实现，供命令行使用

pub mod memory;
pub mod terminal;

pub use memory::MemoryView;
pub use terminal::TerminalView;

use std::fmt;

/// 展示区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// 上传接口返回的原始 JSON
    RawResult,
    /// 摘要
    Summary,
    /// 关键词
    Keywords,
    /// 分类
    Category,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::RawResult => "Sonuç",
            Region::Summary => "Özet",
            Region::Keywords => "Anahtar Kelimeler",
            Region::Category => "Kategori",
        };
        f.write_str(name)
    }
}

/// 区域中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 粗体标签（不含冒号）
    pub label: Option<String>,
    pub value: String,
}

/// 区域内容
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionContent {
    lines: Vec<Line>,
}

impl RegionContent {
    /// 无标签的纯文本
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            lines: vec![Line {
                label: None,
                value: value.into(),
            }],
        }
    }

    /// 单行带标签的内容
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with_line(label, value)
    }

    /// 追加一行带标签的内容
    pub fn with_line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push(Line {
            label: Some(label.into()),
            value: value.into(),
        });
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// 纯文本渲染：`标签: 值`，多行以换行分隔
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| match &line.label {
                Some(label) => format!("{}: {}", label, line.value),
                None => line.value.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// HTML 渲染：`<b>标签:</b> 值`，多行以 `<br>` 分隔，值会被转义
    pub fn to_html(&self) -> String {
        self.lines
            .iter()
            .map(|line| match &line.label {
                Some(label) => format!("<b>{}:</b> {}", escape_html(label), escape_html(&line.value)),
                None => escape_html(&line.value),
            })
            .collect::<Vec<_>>()
            .join("<br>")
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 页面能力
///
/// 实现方需要内部可变，流程会在多个任务间共享同一个 `Arc<dyn View>`
pub trait View: Send + Sync {
    /// 覆盖某个区域的内容
    fn show(&self, region: Region, content: RegionContent);

    /// 读取可编辑文本框
    fn text_field(&self) -> String;

    /// 写入可编辑文本框
    fn set_text_field(&self, text: String);

    /// 阻塞式提示
    fn alert(&self, message: &str);
}
