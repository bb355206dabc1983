// ==========================================
// 学生-房间数据合并工具 - 领域模型层
// ==========================================
// 职责: 定义领域实体
// 红线: 不含文件读写逻辑,不含合并逻辑
// ==========================================

pub mod room;
pub mod student;

// 重导出核心类型
pub use room::{Room, RoomRecord};
pub use student::Student;
