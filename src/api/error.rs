// ==========================================
// 学生-房间数据合并工具 - API层错误类型
// ==========================================
// 职责: 汇总导入层/导出层错误,供入口输出单行诊断
// ==========================================

use crate::error::ErrorKind;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("输出目录创建失败: {}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ApiError {
    /// 错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Import(e) => e.kind(),
            ApiError::Export(e) => e.kind(),
            ApiError::OutputDirectory { .. } => ErrorKind::Io,
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
