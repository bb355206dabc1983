// ==========================================
// 学生-房间数据合并工具 - 学生领域模型
// ==========================================
// 职责: 学生实体定义
// 用途: 导入层映射写入,合并引擎分组,导出层只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Student - 学生
// ==========================================
// room 为指向房间集合的外键,可能指向不存在的房间
// 序列化字段顺序: id, name, room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: i64,      // 学生 ID（学生集合内唯一）
    name: String, // 学生姓名
    room: i64,    // 所属房间 ID（外键）
}

impl Student {
    /// 创建学生实体
    pub fn new(id: i64, name: impl Into<String>, room: i64) -> Self {
        Self {
            id,
            name: name.into(),
            room,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 所属房间 ID
    pub fn room(&self) -> i64 {
        self.room
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_serialize_field_order() {
        let student = Student::new(1, "Alice", 10);
        let json = serde_json::to_string(&student).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Alice","room":10}"#);
    }
}
