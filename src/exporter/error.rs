// ==========================================
// 学生-房间数据合并工具 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::error::ErrorKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("不支持的导出格式: {format}（支持的格式: {}）", supported.join(", "))]
    UnsupportedFormat {
        format: String,
        supported: Vec<&'static str>,
    },

    #[error("输出文件写入失败: {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("序列化失败 ({}): {message}", path.display())]
    Serialize { path: PathBuf, message: String },
}

impl ExportError {
    /// 错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            ExportError::WriteFailed { .. } | ExportError::Serialize { .. } => ErrorKind::Io,
        }
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
