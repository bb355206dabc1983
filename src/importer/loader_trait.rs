// ==========================================
// 学生-房间数据合并工具 - 数据加载 Trait
// ==========================================
// 职责: 定义数据加载接口（不包含实现）
// 红线: 加载器只负责"字节 → 记录",不做关联校验
// ==========================================

use crate::importer::error::ImportResult;
use std::path::Path;

/// 原始记录（字段名 → 未类型化的值）
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

// ==========================================
// DataLoader Trait
// ==========================================
// 用途: 文件 → 原始记录列表
// 实现者: JsonLoader, CsvLoader, UniversalLoader
pub trait DataLoader: Send + Sync {
    /// 加载文件为原始记录列表（保持文件中的记录顺序）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<RawRecord>): 记录列表
    /// - Err(SourceNotFound): 文件不存在或不可读
    /// - Err(MalformedSource): 内容无法按该编码解析
    fn load(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>>;
}

impl<L: DataLoader + ?Sized> DataLoader for &L {
    fn load(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        (**self).load(file_path)
    }
}

impl<L: DataLoader + ?Sized> DataLoader for Box<L> {
    fn load(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        (**self).load(file_path)
    }
}
