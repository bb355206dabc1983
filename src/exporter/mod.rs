// ==========================================
// 学生-房间数据合并工具 - 导出层
// ==========================================
// 职责: Room 列表 → 目标编码文件
// 支持: JSON, XML
// ==========================================

// 模块声明
pub mod error;
pub mod exporter_trait;
pub mod json_exporter;
pub mod registry;
pub mod xml_exporter;

// 重导出核心类型
pub use error::{ExportError, ExportResult};
pub use json_exporter::JsonExporter;
pub use registry::{create_exporter, supported_formats, ExportFormat};
pub use xml_exporter::XmlExporter;

// 重导出 Trait 接口
pub use exporter_trait::DataExporter;
