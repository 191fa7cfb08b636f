mod common;

use std::fs;

use assert_cmd::Command;
use common::cli::{TiraWorkspace, run_tira, run_tira_with_args};
use predicates::prelude::*;

#[test]
fn test_issues_persist_across_runs() {
    let workspace = TiraWorkspace::new();

    let first = run_tira(&workspace, "add Fix login bug\nadd Write docs\nexit\n", "first");
    assert!(first.status.success(), "first run failed: {}", first.stderr);
    assert!(first.stdout.contains("Added issue TI-1"));
    assert!(first.stdout.contains("Added issue TI-2"));

    let second = run_tira(&workspace, "list\nadd Third\n", "second");
    assert!(second.status.success());
    assert!(second.stdout.contains("TI-1\t"));
    assert!(second.stdout.contains("\"Write docs\""));
    assert!(second.stdout.contains("Added issue TI-3"));

    let contents = fs::read_to_string(&workspace.data_file).expect("data file");
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn test_spaces_across_runs() {
    let workspace = TiraWorkspace::new();

    run_tira(&workspace, "add a\nspace QA\nadd b\n", "seed");
    let run = run_tira(&workspace, "spaces\nspace QA\nadd c\n", "spaces");
    assert!(run.stdout.contains("> QA TI\n"));
    assert!(run.stdout.contains("Added issue QA-2"));
}

#[test]
fn test_prompt_and_help_prefix() {
    let workspace = TiraWorkspace::new();

    let run = run_tira(&workspace, "h\n", "help");
    assert!(run.status.success());
    assert!(predicate::str::starts_with("\ntira: TI> ").eval(&run.stdout));
    assert!(run.stdout.contains("Valid actions:\n"));
    assert!(run.stdout.contains("Current space: TI\n"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let workspace = TiraWorkspace::new();

    let run = run_tira(&workspace, "", "eof");
    assert!(run.status.success());
    assert!(run.stderr.is_empty(), "unexpected stderr: {}", run.stderr);
    assert!(!workspace.data_file.exists());
}

#[test]
fn test_corrupt_data_file_is_fatal() {
    let workspace = TiraWorkspace::new();
    fs::write(&workspace.data_file, "{not json\n").expect("write");

    let run = run_tira(&workspace, "list\n", "corrupt");
    assert_eq!(run.status.code(), Some(1));
    assert!(run.stderr.contains("Error:"));
    assert!(run.stderr.contains("line 1"));
}

#[test]
fn test_find_stops_on_n() {
    let workspace = TiraWorkspace::new();

    run_tira(&workspace, "add first bug\nadd second bug\n", "seed");
    let run = run_tira(&workspace, "find BUG\nn\n", "find");
    assert!(run.stdout.contains("TI-1\nfirst bug\n"));
    assert!(!run.stdout.contains("second bug"));
}

#[test]
fn test_underscore_alias_for_data_file() {
    let workspace = TiraWorkspace::new();
    let path = workspace.root.join("nested").join("alias.jsonl");

    let run = run_tira_with_args(
        &workspace,
        [std::ffi::OsStr::new("--data_file"), path.as_os_str()],
        "add via alias\n",
        "alias",
    );
    assert!(run.status.success(), "alias run failed: {}", run.stderr);
    assert!(path.exists());
}

#[test]
fn test_data_file_from_environment() {
    let workspace = TiraWorkspace::new();
    let path = workspace.root.join("env.jsonl");

    Command::cargo_bin("tira")
        .expect("tira binary")
        .current_dir(&workspace.root)
        .env("HOME", &workspace.root)
        .env("TIRA_DATA_FILE", &path)
        .env_remove("TIRA_LOG")
        .env_remove("RUST_LOG")
        .write_stdin("add from env\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added issue TI-1"));

    let contents = fs::read_to_string(&path).expect("data file");
    assert!(contents.contains("\"from env\""));
}

#[test]
fn test_default_location_and_config_space() {
    let workspace = TiraWorkspace::new();
    let app_dir = workspace.root.join(".local").join("tira");
    fs::create_dir_all(&app_dir).expect("app dir");
    fs::write(app_dir.join("config.yaml"), "default_space: QA\n").expect("config");

    let run = run_tira_with_args(&workspace, std::iter::empty::<&str>(), "add hello\n", "default");
    if cfg!(any(windows, target_os = "macos")) {
        return;
    }
    assert!(run.status.success(), "default run failed: {}", run.stderr);
    assert!(run.stdout.contains("tira: QA> "));
    assert!(run.stdout.contains("Added issue QA-1"));
    assert!(app_dir.join("tira_data.jsonl").exists());
}

#[test]
fn test_invalid_config_is_fatal() {
    let workspace = TiraWorkspace::new();
    let app_dir = workspace.root.join(".local").join("tira");
    fs::create_dir_all(&app_dir).expect("app dir");
    fs::write(app_dir.join("config.yaml"), "default_space: nope\n").expect("config");

    let run = run_tira_with_args(&workspace, std::iter::empty::<&str>(), "", "bad_config");
    if cfg!(any(windows, target_os = "macos")) {
        return;
    }
    assert_eq!(run.status.code(), Some(1));
    assert!(run.stderr.contains("default_space"));
}
