// ==========================================
// 学生-房间数据合并工具 - 导出格式注册表
// ==========================================
// 职责: 格式名 → 导出器 解析
// 红线: 支持格式列表只由 ExportFormat::ALL 派生,不重复维护字面量
// ==========================================

use crate::exporter::error::ExportError;
use crate::exporter::exporter_trait::DataExporter;
use crate::exporter::json_exporter::JsonExporter;
use crate::exporter::xml_exporter::XmlExporter;
use std::fmt;
use std::str::FromStr;

// ==========================================
// 导出格式 (Export Format)
// ==========================================
// 新增格式: 增加枚举值 + ALL 条目 + name/exporter 分支
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Json, // 结构化编码
    Xml,  // 标记编码
}

impl ExportFormat {
    /// 注册表: 全部支持的格式
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::Xml];

    /// 格式名（小写）
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Xml => "xml",
        }
    }

    /// 构造对应的导出器
    pub fn exporter(self) -> Box<dyn DataExporter> {
        match self {
            ExportFormat::Json => Box::new(JsonExporter),
            ExportFormat::Xml => Box::new(XmlExporter),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// 大小写不敏感解析
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExportError::UnsupportedFormat {
                format: s.to_string(),
                supported: supported_formats(),
            })
    }
}

/// 支持的格式名列表（注册表顺序）
pub fn supported_formats() -> Vec<&'static str> {
    ExportFormat::ALL.iter().map(|format| format.name()).collect()
}

/// 按格式名创建导出器
///
/// # 参数
/// - format: 格式名（大小写不敏感,如 "json"/"XML"）
///
/// # 返回
/// - Ok(Box<dyn DataExporter>): 导出器
/// - Err(UnsupportedFormat): 未知格式,错误中列出支持的格式
pub fn create_exporter(format: &str) -> Result<Box<dyn DataExporter>, ExportError> {
    let format: ExportFormat = format.parse()?;
    Ok(format.exporter())
}
