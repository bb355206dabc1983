// ==========================================
// 学生-房间数据合并工具 - 引擎层
// ==========================================
// 职责: 实现关联合并规则,不读写文件
// 红线: 合并引擎只依赖 DataLoader 接口,与具体编码解耦
// ==========================================

pub mod combiner;

// 重导出核心引擎
pub use combiner::{combine_records, CombineOutcome, RoomStudentCombiner};
