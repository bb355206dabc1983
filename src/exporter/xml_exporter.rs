// ==========================================
// 学生-房间数据合并工具 - XML 导出器
// ==========================================
// 格式:
// <rooms>
//   <room id="..">
//     <name>..</name>
//     <students><student id=".." room="..">NAME</student></students>
//   </room>
// </rooms>
// 输出: UTF-8, 带 XML 声明
// 红线: 文本含 XML 1.0 不允许的字符时拒绝导出,不创建输出文件
// ==========================================

use crate::domain::Room;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::exporter_trait::{write_output_file, DataExporter};
use crate::exporter::registry::ExportFormat;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub struct XmlExporter;

impl DataExporter for XmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xml
    }

    fn export(&self, rooms: &[Room], output_path: &Path) -> ExportResult<()> {
        check_characters(rooms).map_err(|message| ExportError::Serialize {
            path: output_path.to_path_buf(),
            message,
        })?;

        write_output_file(output_path, |writer| {
            write_document(writer, rooms).map_err(|source| ExportError::WriteFailed {
                path: output_path.to_path_buf(),
                source,
            })
        })?;

        debug!(path = %output_path.display(), rooms = rooms.len(), "XML 导出完成");
        Ok(())
    }
}

/// XML 1.0 Char 产生式（char 已排除代理区）
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn find_forbidden(value: &str) -> Option<char> {
    value.chars().find(|&ch| !is_xml_char(ch))
}

/// 检查所有房间名与学生姓名均可写入 XML 文本
fn check_characters(rooms: &[Room]) -> Result<(), String> {
    for room in rooms {
        if let Some(ch) = find_forbidden(room.name()) {
            return Err(format!(
                "房间 {} 的名称包含 XML 不允许的字符 U+{:04X}",
                room.id(),
                ch as u32
            ));
        }
        for student in room.students() {
            if let Some(ch) = find_forbidden(student.name()) {
                return Err(format!(
                    "学生 {} 的姓名包含 XML 不允许的字符 U+{:04X}",
                    student.id(),
                    ch as u32
                ));
            }
        }
    }
    Ok(())
}

/// 写出完整文档（声明 + 根元素）
fn write_document<W: Write>(out: &mut W, rooms: &[Room]) -> io::Result<()> {
    writeln!(out, "{}", XML_DECLARATION)?;

    if rooms.is_empty() {
        return writeln!(out, "<rooms />");
    }

    write!(out, "<rooms>")?;
    for room in rooms {
        write!(out, r#"<room id="{}">"#, room.id())?;
        write!(out, "<name>{}</name>", escape_text(room.name()))?;

        if room.is_vacant() {
            write!(out, "<students />")?;
        } else {
            write!(out, "<students>")?;
            for student in room.students() {
                write!(
                    out,
                    r#"<student id="{}" room="{}">{}</student>"#,
                    student.id(),
                    student.room(),
                    escape_text(student.name())
                )?;
            }
            write!(out, "</students>")?;
        }

        write!(out, "</room>")?;
    }
    writeln!(out, "</rooms>")
}

/// 转义元素文本中的 XML 特殊字符
fn escape_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
