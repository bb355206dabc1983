// ==========================================
// 学生-房间数据合并工具 - 运行配置
// ==========================================
// 职责: 单次运行的输入/输出路径与导出格式
// ==========================================

use crate::exporter::ExportFormat;
use std::path::PathBuf;

// 默认路径（相对当前工作目录）
pub const DEFAULT_STUDENTS_PATH: &str = "data/students.json";
pub const DEFAULT_ROOMS_PATH: &str = "data/rooms.json";
pub const DEFAULT_OUTPUT_PATH: &str = "output/rooms_output.json";

// ==========================================
// PipelineConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub students_path: PathBuf, // 学生数据源
    pub rooms_path: PathBuf,    // 房间数据源
    pub output_path: PathBuf,   // 输出文件
    pub format: ExportFormat,   // 导出格式
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            students_path: PathBuf::from(DEFAULT_STUDENTS_PATH),
            rooms_path: PathBuf::from(DEFAULT_ROOMS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: ExportFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.students_path, PathBuf::from("data/students.json"));
        assert_eq!(config.rooms_path, PathBuf::from("data/rooms.json"));
        assert_eq!(config.output_path, PathBuf::from("output/rooms_output.json"));
        assert_eq!(config.format, ExportFormat::Json);
    }
}
