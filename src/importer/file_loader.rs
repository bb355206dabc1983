// ==========================================
// 学生-房间数据合并工具 - 文件加载器实现
// ==========================================
// 支持: JSON (对象数组) / CSV (首行表头)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::loader_trait::{DataLoader, RawRecord};
use csv::{ReaderBuilder, Trim};
use serde_json::Value;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::debug;

fn read_error(path: &Path, err: io::Error) -> ImportError {
    // 非 UTF-8 内容属于编码问题,不属于文件缺失
    if err.kind() == io::ErrorKind::InvalidData {
        return ImportError::MalformedSource {
            path: path.to_path_buf(),
            message: err.to_string(),
        };
    }
    ImportError::SourceNotFound {
        path: path.to_path_buf(),
        source: err,
    }
}

// ==========================================
// JSON Loader 实现
// ==========================================
pub struct JsonLoader;

impl DataLoader for JsonLoader {
    fn load(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        let content = fs::read_to_string(file_path).map_err(|e| read_error(file_path, e))?;

        let records: Vec<RawRecord> =
            serde_json::from_str(&content).map_err(|e| ImportError::MalformedSource {
                path: file_path.to_path_buf(),
                message: e.to_string(),
            })?;

        debug!(path = %file_path.display(), records = records.len(), "JSON 数据源加载完成");
        Ok(records)
    }
}

// ==========================================
// CSV Loader 实现
// ==========================================
// 空单元格视为字段缺失,完全空白的行跳过
pub struct CsvLoader;

impl DataLoader for CsvLoader {
    fn load(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        let malformed = |e: csv::Error| ImportError::MalformedSource {
            path: file_path.to_path_buf(),
            message: e.to_string(),
        };

        let file = File::open(file_path).map_err(|e| read_error(file_path, e))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .trim(Trim::All)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(malformed)?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result.map_err(malformed)?;
            let mut record = RawRecord::new();

            for (header, value) in headers.iter().zip(row.iter()) {
                if !value.is_empty() {
                    record.insert(header.clone(), Value::String(value.to_string()));
                }
            }

            if record.is_empty() {
                continue;
            }
            records.push(record);
        }

        debug!(path = %file_path.display(), records = records.len(), "CSV 数据源加载完成");
        Ok(records)
    }
}

// ==========================================
// 数据源编码
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
}

impl SourceFormat {
    /// 根据扩展名判断编码（大小写不敏感）,未知扩展名按 JSON 处理
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => SourceFormat::Csv,
            _ => SourceFormat::Json,
        }
    }
}

// ==========================================
// 通用文件加载器（根据扩展名自动选择）
// ==========================================
pub struct UniversalLoader;

impl DataLoader for UniversalLoader {
    fn load(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        match SourceFormat::from_path(file_path) {
            SourceFormat::Csv => CsvLoader.load(file_path),
            SourceFormat::Json => JsonLoader.load(file_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_json_loader_valid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"[{{"id": 1, "name": "Alice", "room": 10}}, {{"id": 2, "name": "Bob", "room": 20}}]"#
        )
        .unwrap();

        let records = JsonLoader.load(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&Value::from("Alice")));
        assert_eq!(records[1].get("room"), Some(&Value::from(20)));
    }

    #[test]
    fn test_json_loader_file_not_found() {
        let err = JsonLoader
            .load(Path::new("non_existent_students.json"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SourceNotFound);
        assert!(err.to_string().contains("non_existent_students.json"));
    }

    #[test]
    fn test_json_loader_malformed() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"[{{"id": 1, "name": "#).unwrap();

        let err = JsonLoader.load(temp_file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedSource);
    }

    #[test]
    fn test_json_loader_rejects_non_array() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"id": 1}}"#).unwrap();

        let err = JsonLoader.load(temp_file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedSource);
    }

    #[test]
    fn test_csv_loader_valid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "id,name,room").unwrap();
        writeln!(temp_file, "1, Alice ,10").unwrap();
        writeln!(temp_file, "2,Bob,20").unwrap();

        let records = CsvLoader.load(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&Value::from("Alice")));
        assert_eq!(records[1].get("room"), Some(&Value::from("20")));
    }

    #[test]
    fn test_csv_loader_skip_empty_rows_and_cells() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "id,name,room").unwrap();
        writeln!(temp_file, "1,,10").unwrap();
        writeln!(temp_file, ",,").unwrap(); // 空行
        writeln!(temp_file, "2,Bob,20").unwrap();

        let records = CsvLoader.load(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records[0].get("name").is_none());
    }

    #[test]
    fn test_source_format_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("a.csv")), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_path(Path::new("a.CSV")), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_path(Path::new("a.json")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("data")), SourceFormat::Json);
    }

    #[test]
    fn test_universal_loader_dispatch_csv() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "id,name").unwrap();
        writeln!(temp_file, "10,Red").unwrap();

        let records = UniversalLoader.load(temp_file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("id"), Some(&Value::from("10")));
    }
}
