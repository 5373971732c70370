use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "# Title\n\nThis is **bold** and *italic*.\n";

fn pdf_text(path: &std::path::Path) -> String {
    String::from_utf8_lossy(&fs::read(path).unwrap()).into_owned()
}

#[test]
fn detects_pdf_from_output_extension() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    let output = dir.path().join("notes.pdf");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdport");
    cmd.current_dir(dir.path()).arg(&input).arg("-o").arg(&output);
    cmd.assert().success();

    let pdf = pdf_text(&output);
    assert!(pdf.starts_with("%PDF"));
    assert!(pdf.contains("/Helvetica-Bold"));
}

#[test]
fn page_size_extra_parameter() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    let output = dir.path().join("notes.pdf");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdport");
    cmd.current_dir(dir.path())
        .arg(&input)
        .arg("--to")
        .arg("pdf")
        .arg("-o")
        .arg(&output)
        .arg("--extra-page-size")
        .arg("letter");
    cmd.assert().success();

    assert!(pdf_text(&output).contains("[0 0 612 792]"));
}

#[test]
fn invalid_page_size_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdport");
    cmd.current_dir(dir.path())
        .arg(&input)
        .arg("--to")
        .arg("pdf")
        .arg("--extra-page-size")
        .arg("tabloid");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page size 'tabloid'"));
    assert!(!dir.path().join("document.pdf").exists());
}

#[test]
fn options_for_text_are_not_supported() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdport");
    cmd.current_dir(dir.path())
        .arg(&input)
        .arg("--to")
        .arg("txt")
        .arg("--extra-draft");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Export error"));
}
