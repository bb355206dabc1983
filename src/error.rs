// ==========================================
// 学生-房间数据合并工具 - 错误分类
// ==========================================
// 职责: 统一各层错误的分类口径,供调用方输出单行诊断
// ==========================================

use std::fmt;

/// 错误类别
///
/// 各层错误类型通过 `kind()` 归入以下类别,均为终止性错误,不做重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SourceNotFound,    // 输入文件不存在或不可读
    MalformedSource,   // 输入文件无法按声明编码解析
    MalformedRecord,   // 记录缺少必填字段或字段类型错误
    UnsupportedFormat, // 未知导出格式
    Io,                // 输出写入失败
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::SourceNotFound => write!(f, "SOURCE_NOT_FOUND"),
            ErrorKind::MalformedSource => write!(f, "MALFORMED_SOURCE"),
            ErrorKind::MalformedRecord => write!(f, "MALFORMED_RECORD"),
            ErrorKind::UnsupportedFormat => write!(f, "UNSUPPORTED_FORMAT"),
            ErrorKind::Io => write!(f, "IO"),
        }
    }
}
