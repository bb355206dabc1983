// ==========================================
// 学生-房间数据合并工具 - 命令行参数
// ==========================================
// 职责: 命令行参数定义与默认值,转换为 PipelineConfig
// ==========================================

use crate::config::{
    PipelineConfig, DEFAULT_OUTPUT_PATH, DEFAULT_ROOMS_PATH, DEFAULT_STUDENTS_PATH,
};
use crate::exporter::{ExportError, ExportFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "room-student-etl",
    version,
    about = "Combine students and rooms data and export in specified format."
)]
pub struct Cli {
    /// Path to students file (.json or .csv)
    #[arg(long, default_value = DEFAULT_STUDENTS_PATH)]
    pub students: PathBuf,

    /// Path to rooms file (.json or .csv)
    #[arg(long, default_value = DEFAULT_ROOMS_PATH)]
    pub rooms: PathBuf,

    /// Output file path
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Output format: json or xml (case-insensitive)
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// 转换为运行配置
    ///
    /// # 返回
    /// - Err(UnsupportedFormat): --format 不在支持列表中
    pub fn into_config(self) -> Result<PipelineConfig, ExportError> {
        let format: ExportFormat = self.format.parse()?;
        Ok(PipelineConfig {
            students_path: self.students,
            rooms_path: self.rooms,
            output_path: self.output,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["room-student-etl"]);
        assert!(!cli.log_json);
        assert_eq!(cli.into_config().unwrap(), PipelineConfig::default());
    }

    #[test]
    fn test_cli_format_case_insensitive() {
        let cli = Cli::parse_from(["room-student-etl", "--format", "XML"]);
        assert_eq!(cli.into_config().unwrap().format, ExportFormat::Xml);
    }

    #[test]
    fn test_cli_unsupported_format() {
        let cli = Cli::parse_from(["room-student-etl", "--format", "yaml"]);
        let err = cli.into_config().unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }
}
