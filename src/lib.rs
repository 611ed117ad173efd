//! # Tez Özet
//!
//! 论文 PDF 摘要服务的客户端：上传 PDF、触发服务端文本提取、展示摘要 / 关键词 / 分类结果。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 客户端），只暴露能力
//! - `HttpExecutor` - 唯一的 client owner，提供 post_form() 能力
//!
//! ### ② 业务能力层（Clients / Services）
//! - `clients/` - 每个接口一次调用，`SummarizerApi` 是流程层唯一依赖的接口
//! - `services/presenter` - 把响应渲染成区域内容
//! - `services/report_writer` - 导出 TXT / JSON 报告
//!
//! ### ③ 流程层（Workflow）
//! - `UploadFlow` - 上传 → 提取
//! - `SummarizeFlow` - 校验 → 分析 → 渲染
//! - `ActionGuard` - 同一入口再次触发时让旧操作失效
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/form_handlers` - 两个页面入口
//! - `orchestrator/app` - 命令行会话
//!
//! 页面通过 `ui::View` 注入，不做全局查找。

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{HttpSummarizerClient, SummarizerApi};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::HttpExecutor;
pub use models::{AnalyzeResponse, ExtractMethod, UploadRequest};
pub use orchestrator::{App, Orchestrator};
pub use ui::{MemoryView, Region, RegionContent, TerminalView, View};
pub use workflow::{FlowOutcome, SummarizeFlow, UploadFlow};
