// ==========================================
// 学生-房间数据合并工具 - 房间领域模型
// ==========================================
// 职责: 房间实体与房间原始记录定义
// 红线: Room 只由合并引擎构造,构造后不可修改
// 例外: 读回已导出的 JSON 时经反序列化构造,并重新校验不变量
// ==========================================

use crate::domain::student::Student;
use serde::{Deserialize, Serialize};

// ==========================================
// RoomRecord - 房间原始记录
// ==========================================
// 用途: 从房间数据源映射出的 (id, name),尚未挂载学生
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub id: i64,
    pub name: String,
}

// ==========================================
// Room - 房间
// ==========================================
// 不变量: students 中每个学生的 room == id
// 序列化字段顺序: id, name, students
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoomData")]
pub struct Room {
    id: i64,                 // 房间 ID
    name: String,            // 房间名称
    students: Vec<Student>,  // 入住学生（按学生数据源出现顺序,可为空）
}

impl Room {
    /// 由房间原始记录与其学生列表构造房间
    ///
    /// # 说明
    /// - 调用方负责保证 students 均属于该房间
    /// - 空列表表示无人入住
    pub(crate) fn new(record: RoomRecord, students: Vec<Student>) -> Self {
        debug_assert!(students.iter().all(|s| s.room() == record.id));
        Self {
            id: record.id,
            name: record.name,
            students,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// 是否无人入住
    pub fn is_vacant(&self) -> bool {
        self.students.is_empty()
    }
}

// 反序列化中间结构
#[derive(Deserialize)]
struct RoomData {
    id: i64,
    name: String,
    students: Vec<Student>,
}

impl TryFrom<RoomData> for Room {
    type Error = String;

    fn try_from(data: RoomData) -> Result<Self, Self::Error> {
        if let Some(student) = data.students.iter().find(|s| s.room() != data.id) {
            return Err(format!(
                "学生 {} 的 room ({}) 与所在房间 {} 不一致",
                student.id(),
                student.room(),
                data.id
            ));
        }
        Ok(Self {
            id: data.id,
            name: data.name,
            students: data.students,
        })
    }
}
