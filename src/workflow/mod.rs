pub mod action_guard;
pub mod summarize_flow;
pub mod upload_flow;

pub use action_guard::{ActionGuard, ActionKind, Ticket};
pub use summarize_flow::SummarizeFlow;
pub use upload_flow::UploadFlow;

/// 一次操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// 全部步骤完成并写入页面
    Completed,
    /// 被同一入口的新操作取代，结果已丢弃
    Superseded,
    /// 输入不合法，已弹窗，未发请求
    Rejected,
}
