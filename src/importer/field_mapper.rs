// ==========================================
// 学生-房间数据合并工具 - 字段映射器实现
// ==========================================
// 职责: 原始记录 → 领域实体 + 类型转换
// 规则: 只校验必填字段存在性与类型,不做其它模式校验
// ==========================================

use crate::domain::{RoomRecord, Student};
use crate::importer::error::{Dataset, ImportError, ImportResult};
use crate::importer::loader_trait::RawRecord;
use serde_json::Value;

// 必填字段
pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_ROOM: &str = "room";

pub struct FieldMapper;

impl FieldMapper {
    /// 将学生原始记录映射为 Student
    ///
    /// # 参数
    /// - record: 原始记录
    /// - position: 记录序号（从 1 开始,用于错误定位）
    pub fn map_student(&self, record: &RawRecord, position: usize) -> ImportResult<Student> {
        let dataset = Dataset::Students;
        Ok(Student::new(
            self.require_i64(record, FIELD_ID, dataset, position)?,
            self.require_string(record, FIELD_NAME, dataset, position)?,
            self.require_i64(record, FIELD_ROOM, dataset, position)?,
        ))
    }

    /// 将房间原始记录映射为 RoomRecord
    pub fn map_room(&self, record: &RawRecord, position: usize) -> ImportResult<RoomRecord> {
        let dataset = Dataset::Rooms;
        Ok(RoomRecord {
            id: self.require_i64(record, FIELD_ID, dataset, position)?,
            name: self.require_string(record, FIELD_NAME, dataset, position)?,
        })
    }

    /// 提取字段值,null 视为缺失
    fn require<'a>(
        &self,
        record: &'a RawRecord,
        field: &str,
        dataset: Dataset,
        position: usize,
    ) -> ImportResult<&'a Value> {
        record
            .get(field)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ImportError::MissingField {
                dataset,
                position,
                field: field.to_string(),
            })
    }

    /// 解析整数（JSON 数字或十进制文本）
    fn require_i64(
        &self,
        record: &RawRecord,
        field: &str,
        dataset: Dataset,
        position: usize,
    ) -> ImportResult<i64> {
        let invalid = |message: String| ImportError::InvalidField {
            dataset,
            position,
            field: field.to_string(),
            message,
        };

        match self.require(record, field, dataset, position)? {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| invalid(format!("无法解析为整数: {}", n))),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| invalid(format!("无法解析为整数: {}", s))),
            other => Err(invalid(format!("期望整数,实际为: {}", other))),
        }
    }

    /// 提取文本
    fn require_string(
        &self,
        record: &RawRecord,
        field: &str,
        dataset: Dataset,
        position: usize,
    ) -> ImportResult<String> {
        match self.require(record, field, dataset, position)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(ImportError::InvalidField {
                dataset,
                position,
                field: field.to_string(),
                message: format!("期望文本,实际为: {}", other),
            }),
        }
    }
}
