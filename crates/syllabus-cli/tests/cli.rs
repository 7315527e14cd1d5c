use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const SAMPLE: &str = "\
Course Code: CSE1102
Course Title: Introduction to Programming
Credit Hour: 1.00
Prerequisite: N/A
Content: Fundamental concepts of procedural programming.
Textbook: 1. Some Book
2. Another Book

Course Code: CSE4098 A, B, C
Course Title: Capstone Project
Credit Hour: 4.00
Prerequisite: All Major Core Courses, GED 2248
Contents: Design and \"implementation\".
Second line.
";

/// Run the binary with its per-user config directory inside `home`.
fn syllabus(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("syllabus").unwrap();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

#[test]
fn default_run_converts_built_in_catalog() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully converted 114 courses to 'courses.csv'.",
        ));

    let csv = fs::read_to_string(dir.path().join("courses.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Course Code,Course Title,Credit Hour,Prerequisite,Content")
    );
    assert!(lines.next().unwrap().starts_with("CSE1102,Introduction to Programming,1.00,N/A,"));
}

#[test]
fn convert_file_quotes_fields() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("catalog.txt");
    let output = dir.path().join("out.csv");
    fs::write(&input, SAMPLE).unwrap();

    syllabus(dir.path())
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully converted 2 courses"));

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(
        csv,
        "Course Code,Course Title,Credit Hour,Prerequisite,Content\n\
         CSE1102,Introduction to Programming,1.00,N/A,Fundamental concepts of procedural programming.\n\
         \"CSE4098 A, B, C\",Capstone Project,4.00,\"All Major Core Courses, GED 2248\",\
         \"Design and \"\"implementation\"\". Second line.\"\n"
    );
    assert!(!csv.contains("Another Book"));
}

#[test]
fn convert_to_stdout_as_json_with_filter() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("catalog.txt");
    fs::write(&input, SAMPLE).unwrap();

    syllabus(dir.path())
        .args(["convert", "--stdout", "-f", "json", "--filter", "^CSE4098"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Course Code\": \"CSE4098 A, B, C\""))
        .stdout(predicate::str::contains("CSE1102").not());
}

#[test]
fn unwritable_output_reports_generic_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("missing").join("courses.csv");

    syllabus(dir.path())
        .arg("convert")
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error writing to file."));

    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .arg("convert")
        .arg(dir.path().join("nope.txt"))
        .arg("--stdout")
        .assert()
        .failure();
}

#[test]
fn config_delimiter_applies() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let input = dir.path().join("catalog.txt");
    fs::write(&config, r#"{"output": {"delimiter": ";", "include_header": false}}"#).unwrap();
    fs::write(&input, SAMPLE).unwrap();

    syllabus(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["convert", "--stdout"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "CSE1102;Introduction to Programming;1.00;N/A;",
        ));
}

#[test]
fn config_init_and_get() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("nested").join("config.json");

    syllabus(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    syllabus(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "output.path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("courses.csv"));

    syllabus(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn batch_merges_files_in_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Course Code: A1\nCourse Title: First\n").unwrap();
    fs::write(dir.path().join("b.txt"), "Course Code: B2\nCourse Title: Second\n").unwrap();
    fs::write(dir.path().join("c.txt"), [0xff, 0xfe, 0x00]).unwrap();
    let output = dir.path().join("merged.csv");
    let pattern = dir.path().join("*.txt");

    syllabus(dir.path())
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("-o")
        .arg(&output)
        .arg("--continue-on-error")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully converted 2 courses"))
        .stdout(predicate::str::contains("Failed files:"));

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(
        csv,
        "Course Code,Course Title,Credit Hour,Prerequisite,Content\nA1,First,,,\nB2,Second,,,\n"
    );
}

#[test]
fn batch_stops_on_unreadable_file_by_default() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
    let output = dir.path().join("merged.csv");
    let pattern = dir.path().join("*.txt");

    syllabus(dir.path())
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("-o")
        .arg(&output)
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
#[cfg(unix)]
fn config_set_applies_to_later_runs() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["config", "set", "output.delimiter", ";"])
        .assert()
        .success();

    syllabus(dir.path())
        .current_dir(dir.path())
        .assert()
        .success();

    let csv = fs::read_to_string(dir.path().join("courses.csv")).unwrap();
    assert_eq!(
        csv.lines().next(),
        Some("Course Code;Course Title;Credit Hour;Prerequisite;Content")
    );
}

#[test]
fn config_set_rejects_quote_delimiter() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");

    syllabus(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "output.delimiter", "\""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output.delimiter"));

    assert!(!config.exists());
}

#[test]
fn batch_ignores_non_txt_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Course Code: A1\n").unwrap();
    fs::write(dir.path().join("B.TXT"), "Course Code: B2\n").unwrap();
    fs::write(dir.path().join("notes.md"), "Course Code: N9\n").unwrap();
    let output = dir.path().join("merged.json");
    let pattern = dir.path().join("*");

    syllabus(dir.path())
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("-o")
        .arg(&output)
        .args(["-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 catalog files"));

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("A1"));
    assert!(json.contains("B2"));
    assert!(!json.contains("N9"));
}

#[test]
fn stats_report_timing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("catalog.txt");
    fs::write(&input, SAMPLE).unwrap();

    syllabus(dir.path())
        .args(["convert", "--stdout", "--stats"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::is_match(r"Scanned \d+ lines in \d+ ms").unwrap());
}
