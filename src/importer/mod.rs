// ==========================================
// 学生-房间数据合并工具 - 导入层
// ==========================================
// 职责: 外部文件 → 原始记录 → 领域实体
// 支持: JSON, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_loader;
pub mod loader_trait;

// 重导出核心类型
pub use error::{Dataset, ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_loader::{CsvLoader, JsonLoader, SourceFormat, UniversalLoader};

// 重导出 Trait 接口
pub use loader_trait::{DataLoader, RawRecord};
