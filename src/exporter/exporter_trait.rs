// ==========================================
// 学生-房间数据合并工具 - 数据导出 Trait
// ==========================================
// 职责: 定义数据导出接口 + 输出文件写入辅助
// ==========================================

use crate::domain::Room;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::registry::ExportFormat;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

// ==========================================
// DataExporter Trait
// ==========================================
// 用途: Room 列表 → 输出文件
// 实现者: JsonExporter, XmlExporter
pub trait DataExporter: Send + Sync {
    /// 导出格式
    fn format(&self) -> ExportFormat;

    /// 导出房间列表
    ///
    /// # 参数
    /// - rooms: 合并引擎产出的房间列表（保持顺序）
    /// - output_path: 输出文件路径（已存在则整体覆盖）
    ///
    /// # 说明
    /// - 写入失败时文件可能处于部分写入状态,不做清理
    fn export(&self, rooms: &[Room], output_path: &Path) -> ExportResult<()>;
}

/// 在单一作用域内创建、写入并刷新输出文件
///
/// 文件句柄在所有退出路径上随作用域释放。
pub(crate) fn write_output_file<F>(output_path: &Path, write_body: F) -> ExportResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> ExportResult<()>,
{
    let write_failed = |source: io::Error| ExportError::WriteFailed {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);
    write_body(&mut writer)?;
    writer.flush().map_err(write_failed)
}
