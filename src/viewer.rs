//! Opening a finished chart in the platform image viewer

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to launch viewer '{program}': {source}")]
pub struct ViewerError {
    pub program: String,
    #[source]
    pub source: std::io::Error,
}

/// The command that opens `path` with the default application
pub fn viewer_command(path: &Path) -> Command {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

/// Launch the viewer without waiting for it to exit
pub fn open_in_viewer(path: &Path) -> Result<(), ViewerError> {
    let mut cmd = viewer_command(path);
    let program = cmd.get_program().to_string_lossy().into_owned();
    cmd.spawn()
        .map(|_child| ())
        .map_err(|source| ViewerError { program, source })
}
