// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use assert_cmd::Command;

#[test]
fn preview_reads_a_flat_list_from_stdin() {
    let mut cmd = Command::cargo_bin("bouplan").unwrap();

    cmd.arg("preview").write_stdin("src/app/main.py\nREADME.md");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("📁 src/"))
        .stdout(predicates::str::contains("    📄 main.py"))
        .stdout(predicates::str::contains("📄 README.md"));
}

#[test]
fn preview_reads_unix_tree_output() {
    let input = "\
project/
├── src/
│   └── main.py
└── README.md
";
    let mut cmd = Command::cargo_bin("bouplan").unwrap();

    cmd.arg("preview").write_stdin(input);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("📁 project/"))
        .stdout(predicates::str::contains("  📁 src/"))
        .stdout(predicates::str::contains("    📄 main.py"));
}

#[test]
fn detect_reports_the_format_tag() {
    let mut cmd = Command::cargo_bin("bouplan").unwrap();

    cmd.arg("detect").write_stdin("src:\n  main.py");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("yaml_like"));
}

#[test]
fn generate_materializes_into_the_destination() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out");

    let input_file = dir.path().join("layout.txt");
    std::fs::write(&input_file, "src/main.py\nREADME.md").unwrap();

    let mut cmd = Command::cargo_bin("bouplan").unwrap();
    cmd.arg("generate")
        .arg(input_file.to_str().unwrap())
        .arg(destination.to_str().unwrap())
        .arg("--yes");

    cmd.assert().success();

    assert!(destination.join("src").is_dir());
    let main = std::fs::read_to_string(destination.join("src/main.py")).unwrap();
    assert!(main.contains("Auto-generated Python module"));
    assert!(destination.join("README.md").is_file());
}

#[test]
fn generate_honors_the_content_flag() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out");
    let input_file = dir.path().join("layout.txt");
    std::fs::write(&input_file, "notes.txt").unwrap();

    let mut cmd = Command::cargo_bin("bouplan").unwrap();
    cmd.arg("generate")
        .arg(input_file.to_str().unwrap())
        .arg(destination.to_str().unwrap())
        .arg("--yes")
        .arg("--content")
        .arg("placeholder");

    cmd.assert().success();

    let notes = std::fs::read_to_string(destination.join("notes.txt")).unwrap();
    assert_eq!(notes, "placeholder");
}

#[test]
fn invalid_json_fails_with_a_format_error() {
    let mut cmd = Command::cargo_bin("bouplan").unwrap();

    cmd.arg("preview").write_stdin("{not valid}");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("invalid JSON"));
}
