//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `form_handlers` - 页面事件处理器
//! - 入口 A：表单提交（上传 → 提取）
//! - 入口 B：摘要按钮（分析）
//! - 文件选择校验、结果导出
//!
//! ### `app` - 命令行会话
//! - 按配置组装 HTTP 客户端、页面和编排器
//! - 按子命令驱动两个入口
//!
//! ## 层次关系
//!
//! ```text
//! app (命令行会话)
//!     ↓
//! form_handlers::Orchestrator (两个入口)
//!     ↓
//! workflow::UploadFlow / SummarizeFlow (单次操作)
//!     ↓
//! clients / services (能力层：接口调用 / 渲染 / 导出)
//!     ↓
//! infrastructure (基础设施：HttpExecutor)
//! ```

pub mod app;
pub mod form_handlers;

pub use app::App;
pub use form_handlers::Orchestrator;
