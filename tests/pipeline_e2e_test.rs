// ==========================================
// 学生-房间数据合并工具 - 合并导出端到端测试
// ==========================================
// 测试目标: 加载 → 合并 → 导出 全流程,两种导出格式
// ==========================================


use room_student_etl::api::PipelineApi;
use room_student_etl::error::ErrorKind;
use room_student_etl::exporter::{create_exporter, ExportError, ExportFormat};
use room_student_etl::Room;
use std::fs;
use test_helpers::sample_config;

#[test]
fn test_json_round_trip_matches_model() {
    let (_dir, config) = sample_config(ExportFormat::Json);
    let api = PipelineApi::new();

    let rooms = api.combine(&config).unwrap();
    api.export(&rooms, &config).unwrap();

    // 重新解析输出,应与内存模型一致
    let content = fs::read_to_string(&config.output_path).unwrap();
    let parsed: Vec<Room> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, rooms);

    // 非 ASCII 字符不转义
    assert!(content.contains("Борис"));
    assert!(content.contains("\n  {\n    \"id\": 10,"));
}

#[test]
fn test_run_summary() {
    let (_dir, config) = sample_config(ExportFormat::Json);

    let summary = PipelineApi::new().run(&config).unwrap();

    assert_eq!(summary.room_count, 3);
    assert_eq!(summary.student_count, 3);
    assert_eq!(summary.orphaned_count, 1);
    assert_eq!(summary.output_path, config.output_path);
}

#[test]
fn test_xml_export_document() {
    let (_dir, config) = sample_config(ExportFormat::Xml);

    PipelineApi::new().run(&config).unwrap();

    let content = fs::read_to_string(&config.output_path).unwrap();
    assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rooms>"));
    assert!(content.contains(
        "<room id=\"10\"><name>Red</name><students>\
         <student id=\"1\" room=\"10\">Alice</student>\
         <student id=\"3\" room=\"10\">Carol</student>\
         </students></room>"
    ));
    assert!(content.contains("<student id=\"2\" room=\"20\">Борис</student>"));
    assert!(content.contains("<room id=\"30\"><name>Green</name><students /></room>"));
    assert!(!content.contains("Ghost"));
    assert!(content.trim_end().ends_with("</rooms>"));
}

#[test]
fn test_export_overwrites_previous_output() {
    let (_dir, config) = sample_config(ExportFormat::Json);
    fs::create_dir_all(config.output_path.parent().unwrap()).unwrap();
    fs::write(&config.output_path, "stale content ".repeat(1000)).unwrap();

    PipelineApi::new().run(&config).unwrap();

    let content = fs::read_to_string(&config.output_path).unwrap();
    assert!(!content.contains("stale"));
    let parsed: Vec<Room> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.len(), 3);
}

#[test]
fn test_unsupported_format_lists_supported() {
    let err = create_exporter("yaml").err().unwrap();

    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    match err {
        ExportError::UnsupportedFormat { format, supported } => {
            assert_eq!(format, "yaml");
            assert_eq!(supported, vec!["json", "xml"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_students_source_leaves_no_output() {
    let (dir, mut config) = sample_config(ExportFormat::Json);
    config.students_path = dir.path().join("missing_students.json");

    let err = PipelineApi::new().run(&config).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SourceNotFound);
    assert!(err.to_string().contains("missing_students.json"));
    assert!(!config.output_path.exists());
}
