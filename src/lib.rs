// ==========================================
// 学生-房间数据合并工具 - 核心库
// ==========================================
// 流程: 加载 → 合并 → 导出
// 系统定位: 单次批处理,全量读入内存,无持久化
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 关联合并
pub mod engine;

// 导出层 - 目标编码
pub mod exporter;

// 配置层 - 运行配置
pub mod config;

// API 层 - 流程编排
pub mod api;

// 命令行参数
pub mod cli;

// 错误分类
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{Room, RoomRecord, Student};

// 导入
pub use importer::{CsvLoader, DataLoader, ImportError, JsonLoader, RawRecord, UniversalLoader};

// 引擎
pub use engine::{CombineOutcome, RoomStudentCombiner};

// 导出
pub use exporter::{create_exporter, supported_formats, DataExporter, ExportError, ExportFormat};

// API
pub use api::{ApiError, PipelineApi, RunSummary};
pub use config::PipelineConfig;
pub use error::ErrorKind;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "学生-房间数据合并工具";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
