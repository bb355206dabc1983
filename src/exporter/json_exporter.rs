// ==========================================
// 学生-房间数据合并工具 - JSON 导出器
// ==========================================
// 格式: [{id, name, students: [{id, name, room}]}]
// 输出: UTF-8, 2 空格缩进, 非 ASCII 字符不转义
// ==========================================

use crate::domain::Room;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::exporter_trait::{write_output_file, DataExporter};
use crate::exporter::registry::ExportFormat;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

pub struct JsonExporter;

impl DataExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, rooms: &[Room], output_path: &Path) -> ExportResult<()> {
        write_output_file(output_path, |writer| {
            serde_json::to_writer_pretty(&mut *writer, rooms).map_err(|e| {
                if e.is_io() {
                    ExportError::WriteFailed {
                        path: output_path.to_path_buf(),
                        source: io::Error::from(e),
                    }
                } else {
                    ExportError::Serialize {
                        path: output_path.to_path_buf(),
                        message: e.to_string(),
                    }
                }
            })?;

            writeln!(writer).map_err(|source| ExportError::WriteFailed {
                path: output_path.to_path_buf(),
                source,
            })
        })?;

        debug!(path = %output_path.display(), rooms = rooms.len(), "JSON 导出完成");
        Ok(())
    }
}
