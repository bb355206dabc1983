// ==========================================
// 学生-房间数据合并工具 - 学生房间合并引擎
// ==========================================
// 职责: 按外键 student.room → room.id 关联学生与房间
// 输入: 学生数据源 + 房间数据源（经注入的 DataLoader 加载）
// 输出: 按房间数据源顺序排列的 Room 列表
// ==========================================
// 规则:
// 1) 房间输出顺序 = 房间数据源顺序,重复 ID 不去重
// 2) 房间内学生顺序 = 学生数据源顺序
// 3) 指向不存在房间的学生不出现在输出中（记录 warn 日志）
// ==========================================

use crate::domain::{Room, RoomRecord, Student};
use crate::importer::{DataLoader, FieldMapper, ImportResult, RawRecord};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

// ==========================================
// CombineOutcome - 合并结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineOutcome {
    pub rooms: Vec<Room>,                // 输出房间（房间数据源顺序）
    pub orphaned_students: Vec<Student>, // 未匹配到房间的学生（学生数据源顺序）
}

// ==========================================
// RoomStudentCombiner - 学生房间合并引擎
// ==========================================
pub struct RoomStudentCombiner<L: DataLoader> {
    data_loader: L,
}

impl<L: DataLoader> RoomStudentCombiner<L> {
    /// 创建合并引擎
    ///
    /// # 参数
    /// - data_loader: 数据加载器（学生与房间数据源共用）
    pub fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// 合并学生与房间数据
    ///
    /// # 返回
    /// - Ok(Vec<Room>): 房间列表
    /// - Err: 数据源缺失/格式错误/记录字段错误
    pub fn combine(&self, students_file: &Path, rooms_file: &Path) -> ImportResult<Vec<Room>> {
        Ok(self.combine_with_report(students_file, rooms_file)?.rooms)
    }

    /// 合并学生与房间数据,并返回被丢弃的学生
    #[instrument(skip_all, fields(
        students_file = %students_file.display(),
        rooms_file = %rooms_file.display()
    ))]
    pub fn combine_with_report(
        &self,
        students_file: &Path,
        rooms_file: &Path,
    ) -> ImportResult<CombineOutcome> {
        // 先加载学生,失败时错误指向学生数据源
        let students_data = self.data_loader.load(students_file)?;
        let rooms_data = self.data_loader.load(rooms_file)?;
        info!(
            students = students_data.len(),
            rooms = rooms_data.len(),
            "数据源加载完成"
        );

        combine_records(&students_data, &rooms_data)
    }
}

/// 合并已加载的原始记录
///
/// 纯函数,不访问文件系统。
pub fn combine_records(
    students_data: &[RawRecord],
    rooms_data: &[RawRecord],
) -> ImportResult<CombineOutcome> {
    let mapper = FieldMapper;

    // === 步骤 1: 字段映射 ===
    let students = students_data
        .iter()
        .enumerate()
        .map(|(idx, record)| mapper.map_student(record, idx + 1))
        .collect::<ImportResult<Vec<Student>>>()?;

    let room_records = rooms_data
        .iter()
        .enumerate()
        .map(|(idx, record)| mapper.map_room(record, idx + 1))
        .collect::<ImportResult<Vec<RoomRecord>>>()?;
    debug!(
        students = students.len(),
        rooms = room_records.len(),
        "字段映射完成"
    );

    // === 步骤 2: 孤立学生与重复房间检测 ===
    let room_ids: HashSet<i64> = room_records.iter().map(|r| r.id).collect();
    let orphaned_students: Vec<Student> = students
        .iter()
        .filter(|s| !room_ids.contains(&s.room()))
        .cloned()
        .collect();

    if !orphaned_students.is_empty() {
        let missing_rooms: BTreeSet<i64> = orphaned_students.iter().map(|s| s.room()).collect();
        warn!(
            count = orphaned_students.len(),
            missing_rooms = ?missing_rooms,
            "部分学生指向不存在的房间,已从输出中丢弃"
        );
    }

    if room_ids.len() != room_records.len() {
        warn!(
            duplicates = room_records.len() - room_ids.len(),
            "房间数据源存在重复 ID,按原样输出"
        );
    }

    // === 步骤 3: 按房间分组 ===
    let students_by_room = group_by_room(students);

    // === 步骤 4: 按房间数据源顺序构造 Room ===
    let rooms: Vec<Room> = room_records
        .into_iter()
        .map(|record| {
            let room_students = students_by_room
                .get(&record.id)
                .cloned()
                .unwrap_or_default();
            Room::new(record, room_students)
        })
        .collect();

    info!(
        rooms = rooms.len(),
        orphaned = orphaned_students.len(),
        "学生房间合并完成"
    );

    Ok(CombineOutcome {
        rooms,
        orphaned_students,
    })
}

/// 按 room 分组,保持每组内的插入顺序
fn group_by_room(students: Vec<Student>) -> HashMap<i64, Vec<Student>> {
    let mut students_by_room: HashMap<i64, Vec<Student>> = HashMap::new();
    for student in students {
        students_by_room
            .entry(student.room())
            .or_default()
            .push(student);
    }
    students_by_room
}
