//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, ExecutionSummary, RunCommand, RunSource, render_summary};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_edge_list(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run(source: RunSource) -> RunCommand {
    RunCommand {
        show_tree: false,
        show_adjacency: false,
        source,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn rendered(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = render_summary(summary, &mut buffer) {
        panic!("rendering into memory failed: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("summary is not UTF-8: {err}"),
    }
}
