// ==========================================
// 学生-房间数据合并工具 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::error::ErrorKind;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ==========================================
// Dataset - 数据集标识
// ==========================================
// 用途: 字段错误中标明出错记录所属的数据源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Students,
    Rooms,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Students => write!(f, "students"),
            Dataset::Rooms => write!(f, "rooms"),
        }
    }
}

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("数据源不存在或不可读: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("数据源格式错误 ({}): {message}", path.display())]
    MalformedSource { path: PathBuf, message: String },

    // ===== 记录映射错误 =====
    #[error("记录缺少必填字段 ({dataset} 第 {position} 条): {field}")]
    MissingField {
        dataset: Dataset,
        position: usize,
        field: String,
    },

    #[error("记录字段类型错误 ({dataset} 第 {position} 条, 字段 {field}): {message}")]
    InvalidField {
        dataset: Dataset,
        position: usize,
        field: String,
        message: String,
    },
}

impl ImportError {
    /// 错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImportError::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            ImportError::MalformedSource { .. } => ErrorKind::MalformedSource,
            ImportError::MissingField { .. } | ImportError::InvalidField { .. } => {
                ErrorKind::MalformedRecord
            }
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
