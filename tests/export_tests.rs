mod common;
use common::temp_out;
use rtimesheet::export::{CsvRenderer, DocumentRenderer, ExportFormat, ExportLogic, JsonRenderer, PdfManager, PdfRenderer};
use rtimesheet::{AppError, Language, build};
use std::fs;
use std::io::Cursor;
use std::path::Path;

#[test]
fn test_csv_export_rows() {
    let t = build(2025, 1, 1, "Ana", "Joao", Language::Spanish).unwrap();
    let out = temp_out("export_csv_rows", "csv");

    CsvRenderer.render(&t, Path::new(&out)).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1 + 23);
    assert!(lines[0].starts_with("date,weekday_index,weekday"));
    assert!(lines[1].starts_with("2025-01-01,2,Miércoles,Enero"));
    assert!(lines[23].starts_with("2025-01-31,4,Viernes"));
}

#[test]
fn test_csv_export_empty_period_keeps_header() {
    let t = build(2025, 5, 31, "Ana", "Joao", Language::English).unwrap();
    let out = temp_out("export_csv_empty", "csv");

    CsvRenderer.render(&t, Path::new(&out)).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_json_export_contains_metadata() {
    let t = build(2024, 2, 1, "Ana", "Joao", Language::English).unwrap();
    let out = temp_out("export_json_meta", "json");

    JsonRenderer.render(&t, Path::new(&out)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["period_label"], "February 2024");
    assert_eq!(value["employee"], "Ana");
    assert_eq!(value["language"], "English");
    assert_eq!(value["rows"].as_array().unwrap().len(), 21);
    assert_eq!(value["rows"][20]["weekday"], "Thursday");
    assert_eq!(value["rows"][20]["date"]["day"], 29);
}

#[test]
fn test_pdf_export_is_a_pdf() {
    let t = build(2025, 3, 1, "Ana Souza", "Joao Lima", Language::Portuguese).unwrap();
    let out = temp_out("export_pdf", "pdf");

    PdfRenderer.render(&t, Path::new(&out)).unwrap();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.windows(14).any(|w| w == b"FOLHA DE PONTO"));
}

#[test]
fn test_pdf_manager_in_memory() {
    let t = build(2025, 1, 1, "Ana", "Joao", Language::Spanish).unwrap();
    let mut pdf = PdfManager::new();
    pdf.write_timesheet(&t);
    let bytes = pdf.finish();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_logic_default_filename_in_output_dir() {
    let t = build(2025, 12, 15, "Maria Elena", "Carlos", Language::Spanish).unwrap();
    let dir = std::env::temp_dir().join("rtimesheet_export_logic_dir");
    fs::remove_dir_all(&dir).ok();

    let written = ExportLogic::export(&t, ExportFormat::Csv, None, Some(&dir), true).unwrap();

    assert_eq!(written, dir.join("timesheet_maria_diciembre_2025.csv"));
    assert!(written.exists());
}

#[test]
fn test_export_format_parsing() {
    assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
    assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert!(matches!(
        "xlsx".parse::<ExportFormat>(),
        Err(AppError::InvalidExportFormat(_))
    ));
}

#[test]
fn test_export_format_from_file_extension() {
    assert_eq!(ExportFormat::resolve(Some(ExportFormat::Csv), Some(Path::new("a.json"))).unwrap(), ExportFormat::Csv);
    assert_eq!(ExportFormat::resolve(None, Some(Path::new("a.JSON"))).unwrap(), ExportFormat::Json);
    assert_eq!(ExportFormat::resolve(None, Some(Path::new("a.csv"))).unwrap(), ExportFormat::Csv);
    assert_eq!(ExportFormat::resolve(None, Some(Path::new("sheet"))).unwrap(), ExportFormat::Pdf);
    assert_eq!(ExportFormat::resolve(None, None).unwrap(), ExportFormat::Pdf);
    assert!(matches!(
        ExportFormat::resolve(None, Some(Path::new("a.xlsx"))),
        Err(AppError::InvalidExportFormat(_))
    ));
}

#[test]
fn test_declined_overwrite_keeps_file() {
    let t = build(2025, 1, 1, "Ana", "Joao", Language::Spanish).unwrap();
    let out = temp_out("export_declined", "csv");
    fs::write(&out, "keep me").unwrap();

    let result = ExportLogic::export_with_input(
        &t,
        ExportFormat::Csv,
        Some(Path::new(&out)),
        None,
        false,
        &mut Cursor::new("n\n"),
    );

    assert!(matches!(result, Err(AppError::Export(_))));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_accepted_overwrite_replaces_file() {
    let t = build(2025, 1, 1, "Ana", "Joao", Language::Spanish).unwrap();
    let out = temp_out("export_accepted", "csv");
    fs::write(&out, "old").unwrap();

    ExportLogic::export_with_input(
        &t,
        ExportFormat::Csv,
        Some(Path::new(&out)),
        None,
        false,
        &mut Cursor::new("Yes\n"),
    )
    .unwrap();

    assert!(fs::read_to_string(&out).unwrap().starts_with("date,"));
}

#[test]
fn test_export_creates_missing_output_dir() {
    let t = build(2025, 2, 1, "Ana", "Joao", Language::English).unwrap();
    let dir = std::env::temp_dir().join("rtimesheet_nested_out").join("2025");
    fs::remove_dir_all(dir.parent().unwrap()).ok();
    let out = dir.join("feb.json");

    // nothing to confirm for a new file, so no input is read
    ExportLogic::export_with_input(&t, ExportFormat::Json, Some(&out), None, false, &mut Cursor::new(""))
        .unwrap();

    assert!(out.exists());
}
