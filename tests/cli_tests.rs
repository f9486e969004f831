use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rts, temp_out, write_config};

#[test]
fn test_show_january_2025_spanish() {
    let cfg = write_config("cli_show_es", "default_employee: Ana Souza\nlanguage: es\n");

    rts()
        .args(["--config", &cfg, "show", "--month", "1", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("HOJA DE CONTROL DE ASISTENCIA"))
        .stdout(contains("Enero 2025"))
        .stdout(contains("01/01/2025").and(contains("Miércoles")))
        .stdout(contains("31/01/2025"))
        .stdout(contains("Ana Souza"))
        .stdout(contains("23 day(s)"));
}

#[test]
fn test_show_lang_override() {
    let cfg = write_config("cli_show_pt", "language: es\n");

    rts()
        .args([
            "--config", &cfg, "show", "-m", "3", "-y", "2025", "-s", "31", "--lang", "pt",
        ])
        .assert()
        .success()
        .stdout(contains("Segunda-feira"))
        .stdout(contains("1 day(s)"));
}

#[test]
fn test_missing_config_warns_and_uses_examples() {
    let cfg = temp_out("cli_missing_cfg", "conf");

    rts()
        .args(["--config", &cfg, "show", "-m", "2", "-y", "2024", "--lang", "en"])
        .assert()
        .success()
        .stderr(contains("Using example names"))
        .stdout(contains("Maria Elena Rodriguez Garcia"))
        .stdout(contains("29/02/2024"))
        .stdout(contains("21 day(s)"));
}

#[test]
fn test_invalid_period_fails() {
    let cfg = write_config("cli_invalid_period", "language: es\n");

    rts()
        .args(["--config", &cfg, "show", "-m", "4", "-y", "2025", "-s", "32"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));

    rts()
        .args(["--config", &cfg, "show", "-m", "13", "-y", "2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_unsupported_language_fails() {
    let cfg = write_config("cli_bad_lang_arg", "language: es\n");

    rts()
        .args(["--config", &cfg, "show", "-m", "1", "-y", "2025", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(contains("Unsupported language"));

    let bad = write_config("cli_bad_lang_cfg", "language: de\n");
    rts()
        .args(["--config", &bad, "show", "-m", "1", "-y", "2025"])
        .assert()
        .failure()
        .stderr(contains("Unsupported language: de"));
}

#[test]
fn test_generate_csv() {
    let cfg = write_config("cli_generate_csv", "language: en\n");
    let out = temp_out("cli_generate_csv", "csv");

    rts()
        .args([
            "--config", &cfg, "generate", "-m", "12", "-y", "2025", "-s", "15", "--format",
            "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV timesheet written"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-12-15,0,Monday,December"));
    assert!(content.contains("2025-12-31,2,Wednesday"));
    assert!(!content.contains("2025-12-20"));
}

#[test]
fn test_generate_pdf() {
    let cfg = write_config("cli_generate_pdf", "language: es\n");
    let out = temp_out("cli_generate_pdf", "pdf");

    rts()
        .args([
            "--config", &cfg, "generate", "-m", "1", "-y", "2026", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_generate_refuses_overwrite_without_force() {
    let cfg = write_config("cli_generate_no_force", "language: es\n");
    let out = temp_out("cli_generate_no_force", "json");
    fs::write(&out, "keep me").unwrap();

    rts()
        .args([
            "--config", &cfg, "generate", "-m", "1", "-y", "2026", "--format", "json", "--file",
            &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_init_and_config_check() {
    let cfg = temp_out("cli_init", "conf");

    rts()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    rts()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration OK: language es"))
        .stdout(contains("workday 08:00"));

    rts()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_supervisor: Carlos Alberto Martinez Silva"));
}

#[test]
fn test_show_fill_uses_configured_workday() {
    let cfg = write_config("cli_show_fill", "language: en\nworkday_duration: 7h30m\n");

    rts()
        .args([
            "--config", &cfg, "show", "-m", "3", "-y", "2025", "-s", "31", "--fill", "09:00-17:00",
        ])
        .assert()
        .success()
        .stdout(contains("31/03/2025"))
        .stdout(contains("08:00"))
        .stdout(contains("+00:30"))
        .stdout(contains("TOTAL"));
}

#[test]
fn test_show_fill_rejects_bad_schedule() {
    let cfg = write_config("cli_show_fill_bad", "language: en\n");

    rts()
        .args(["--config", &cfg, "show", "-m", "3", "-y", "2025", "--fill", "nine-five"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_generate_format_from_extension() {
    let cfg = write_config("cli_generate_ext", "language: pt\n");
    let out = temp_out("cli_generate_ext", "json");

    rts()
        .args(["--config", &cfg, "generate", "-m", "3", "-y", "2025", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("JSON timesheet written"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"period_label\": \"Março 2025\""));

    let bad = temp_out("cli_generate_ext", "xlsx");
    rts()
        .args(["--config", &cfg, "generate", "-m", "3", "-y", "2025", "--file", &bad])
        .assert()
        .failure()
        .stderr(contains("Export format not supported: xlsx"));
}
