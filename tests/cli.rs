use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn vitron(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vitron"))
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env("NO_EMOJI", "1")
        .output()
        .expect("spawn vitron")
}

#[test]
fn no_args_prints_help() {
    let tmp = TempDir::new().unwrap();
    let bare = vitron(tmp.path(), &[]);
    let help = vitron(tmp.path(), &["help"]);
    assert!(bare.status.success());
    assert_eq!(bare.stdout, help.stdout);
    let text = String::from_utf8_lossy(&bare.stdout);
    assert!(text.contains("  init         Create a new project skeleton"));
}

#[test]
fn unknown_command_exits_one() {
    let tmp = TempDir::new().unwrap();
    let out = vitron(tmp.path(), &["bogus"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Unknown command: bogus"));
    assert!(out.stdout.is_empty());
}

#[test]
fn init_scaffolds_under_working_directory() {
    let tmp = TempDir::new().unwrap();
    let out = vitron(tmp.path(), &["init", "cli-demo"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let root = tmp.path().join("cli-demo");
    for file in ["package.json", "tsconfig.json", "src/index.ts", "tests/index.test.ts", "README.md", ".gitignore"] {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    assert!(root.join("docs").is_dir());
    assert!(root.join("config").is_dir());

    // second run over the existing tree succeeds
    assert!(vitron(tmp.path(), &["init", "cli-demo"]).status.success());
}

#[test]
fn init_without_name_uses_default() {
    let tmp = TempDir::new().unwrap();
    assert!(vitron(tmp.path(), &["init"]).status.success());
    let manifest = fs::read_to_string(tmp.path().join("my-vitron-project/package.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(value["name"], "my-vitron-project");
}

#[test]
fn init_failure_reports_command() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("occupied"), "x").unwrap();
    let out = vitron(tmp.path(), &["init", "occupied"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Error executing command 'init'"));
    assert!(err.contains("occupied"));
}

#[test]
fn flag_like_args_after_command_reach_the_handler() {
    let tmp = TempDir::new().unwrap();
    for flag in ["--help", "-v", "--version", "--no-color"] {
        let out = vitron(tmp.path(), &["hello", flag]);
        assert_eq!(out.status.code(), Some(0), "hello {flag}");
        assert_eq!(String::from_utf8_lossy(&out.stdout), format!("Hello, {flag}!\n"));
    }
}

#[test]
fn init_with_flag_like_name_uses_it_verbatim() {
    let tmp = TempDir::new().unwrap();
    let out = vitron(tmp.path(), &["init", "-q"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(tmp.path().join("-q/package.json").is_file());
    assert!(!tmp.path().join("my-vitron-project").exists());
}
