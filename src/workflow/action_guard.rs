//! 操作代次守卫
//!
//! 同一入口被再次触发时，旧的请求序列不再写页面

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

/// 入口类型（仅用于日志显示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// 表单提交：上传 + 提取
    Upload,
    /// 点击摘要按钮：分析
    Summarize,
}

/// 一次操作的凭据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: ActionKind,
    pub generation: u64,
}

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.kind {
            ActionKind::Upload => "上传",
            ActionKind::Summarize => "摘要",
        };
        write!(f, "[{} #{}]", name, self.generation)
    }
}

/// 每个入口一个守卫
#[derive(Debug)]
pub struct ActionGuard {
    kind: ActionKind,
    generation: AtomicU64,
}

impl ActionGuard {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            generation: AtomicU64::new(0),
        }
    }

    /// 开始一次新操作，之前发出的凭据全部失效
    pub fn begin(&self) -> Ticket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            kind: self.kind,
            generation,
        }
    }

    /// 凭据是否仍是最新一次
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }
}
