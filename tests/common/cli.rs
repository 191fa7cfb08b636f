use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated home directory plus a data file path inside it.
pub struct TiraWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub data_file: PathBuf,
}

impl TiraWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let root = temp_dir.path().to_path_buf();
        let data_file = root.join("tira_data.jsonl");
        Self {
            temp_dir,
            root,
            data_file,
        }
    }
}

pub struct TiraRun {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `tira` against the workspace data file, feeding `stdin`.
pub fn run_tira(workspace: &TiraWorkspace, stdin: &str, label: &str) -> TiraRun {
    let data_file = workspace.data_file.clone();
    run_tira_with_args(
        workspace,
        [OsStr::new("--data-file"), data_file.as_os_str()],
        stdin,
        label,
    )
}

/// Run `tira` with explicit arguments, feeding `stdin`.
pub fn run_tira_with_args<I, S>(workspace: &TiraWorkspace, args: I, stdin: &str, label: &str) -> TiraRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::cargo_bin("tira").expect("tira binary");
    cmd.current_dir(&workspace.root)
        .args(args)
        .env("HOME", &workspace.root)
        .env("XDG_DATA_HOME", workspace.root.join(".data"))
        .env_remove("TIRA_DATA_FILE")
        .env_remove("TIRA_LOG")
        .env_remove("RUST_LOG")
        .write_stdin(stdin.to_string());

    let output = cmd.output().expect("run tira");
    let run = TiraRun {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    if !run.status.success() {
        eprintln!("[{label}] stderr:\n{}", run.stderr);
    }
    run
}
