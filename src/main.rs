// ==========================================
// 学生-房间数据合并工具 - 命令行入口
// ==========================================
// 流程: 解析参数 → 初始化日志 → 合并 → 创建输出目录 → 导出
// 退出码: 成功 0, 任一错误 1（错误信息输出到 stderr）
// ==========================================

use clap::Parser;
use room_student_etl::api::PipelineApi;
use room_student_etl::cli::Cli;
use room_student_etl::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日志系统
    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::debug!("{} v{}", room_student_etl::APP_NAME, room_student_etl::VERSION);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "运行失败");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config()?;
    let api = PipelineApi::new();

    let rooms = api.combine(&config)?;
    api.prepare_output(&config)?;

    println!(
        "Exporting {} rooms to {}",
        rooms.len(),
        config.output_path.display()
    );
    api.export(&rooms, &config)?;

    println!(
        "Successfully exported {} rooms to {}",
        rooms.len(),
        config.output_path.display()
    );
    Ok(())
}
