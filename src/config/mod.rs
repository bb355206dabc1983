// ==========================================
// 学生-房间数据合并工具 - 配置层
// ==========================================
// 职责: 运行配置与默认值
// ==========================================

pub mod pipeline_config;

// 重导出核心配置
pub use pipeline_config::{
    PipelineConfig, DEFAULT_OUTPUT_PATH, DEFAULT_ROOMS_PATH, DEFAULT_STUDENTS_PATH,
};
