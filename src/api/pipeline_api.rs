// ==========================================
// 学生-房间数据合并工具 - 合并导出API
// ==========================================
// 职责: 加载 → 合并 → 导出 流程编排
// 流程: 选择加载器 → 合并 → 创建输出目录 → 选择导出器 → 写出
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::PipelineConfig;
use crate::domain::Room;
use crate::engine::RoomStudentCombiner;
use crate::exporter::ExportFormat;
use crate::importer::{DataLoader, UniversalLoader};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument};

/// 运行结果汇总
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 导出的房间数
    pub room_count: usize,
    /// 导出的学生数（不含被丢弃的孤立学生）
    pub student_count: usize,
    /// 孤立学生数
    pub orphaned_count: usize,
    /// 输出文件
    pub output_path: PathBuf,
    /// 导出格式
    pub format: ExportFormat,
}

/// 合并导出API
pub struct PipelineApi<L: DataLoader = UniversalLoader> {
    combiner: RoomStudentCombiner<L>,
}

impl PipelineApi<UniversalLoader> {
    /// 按扩展名自动选择加载器
    pub fn new() -> Self {
        Self::with_loader(UniversalLoader)
    }
}

impl Default for PipelineApi<UniversalLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DataLoader> PipelineApi<L> {
    /// 使用指定加载器创建
    pub fn with_loader(data_loader: L) -> Self {
        Self {
            combiner: RoomStudentCombiner::new(data_loader),
        }
    }

    /// 合并学生与房间数据
    pub fn combine(&self, config: &PipelineConfig) -> ApiResult<Vec<Room>> {
        let rooms = self
            .combiner
            .combine(&config.students_path, &config.rooms_path)?;
        Ok(rooms)
    }

    /// 创建输出文件的父目录（已存在时无操作）
    pub fn prepare_output(&self, config: &PipelineConfig) -> ApiResult<()> {
        prepare_output_dir(&config.output_path)
    }

    /// 导出房间列表（输出目录不存在时自动创建）
    pub fn export(&self, rooms: &[Room], config: &PipelineConfig) -> ApiResult<()> {
        self.prepare_output(config)?;

        let exporter = config.format.exporter();
        exporter.export(rooms, &config.output_path)?;
        Ok(())
    }

    /// 执行完整流程
    ///
    /// # 返回
    /// - Ok(RunSummary): 运行结果汇总
    /// - Err(ApiError): 任一阶段失败（不重试）
    #[instrument(skip_all, fields(
        students = %config.students_path.display(),
        rooms = %config.rooms_path.display(),
        output = %config.output_path.display(),
        format = %config.format
    ))]
    pub fn run(&self, config: &PipelineConfig) -> ApiResult<RunSummary> {
        let start_time = Instant::now();

        let result = self.run_inner(config);
        match &result {
            Ok(summary) => info!(
                rooms = summary.room_count,
                students = summary.student_count,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "合并导出完成"
            ),
            Err(e) => error!(kind = %e.kind(), error = %e, "合并导出失败"),
        }
        result
    }

    fn run_inner(&self, config: &PipelineConfig) -> ApiResult<RunSummary> {
        let outcome = self
            .combiner
            .combine_with_report(&config.students_path, &config.rooms_path)?;

        info!(
            rooms = outcome.rooms.len(),
            path = %config.output_path.display(),
            "开始导出"
        );
        self.export(&outcome.rooms, config)?;

        Ok(RunSummary {
            room_count: outcome.rooms.len(),
            student_count: outcome.rooms.iter().map(|r| r.students().len()).sum(),
            orphaned_count: outcome.orphaned_students.len(),
            output_path: config.output_path.clone(),
            format: config.format,
        })
    }
}

/// 创建输出文件的父目录
fn prepare_output_dir(output_path: &Path) -> ApiResult<()> {
    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| ApiError::OutputDirectory {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
