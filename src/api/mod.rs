// ==========================================
// 学生-房间数据合并工具 - API层
// ==========================================
// 职责: 对入口层暴露完整流程,统一错误类型
// ==========================================

pub mod error;
pub mod pipeline_api;

// 重导出
pub use error::{ApiError, ApiResult};
pub use pipeline_api::{PipelineApi, RunSummary};
