use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::process::Stdio;

use super::parse::Redirect;
use super::resolve::ResolvedRedirects;

/// OS-level handles ready to hand to `std::process::Command`.
#[derive(Debug)]
pub struct StdioTriple {
    pub stdin: Stdio,
    pub stdout: Stdio,
    pub stderr: Stdio,
}

impl ResolvedRedirects {
    /// Opens every file the redirects refer to.
    ///
    /// `write` truncates and `append` appends; both create missing files.
    /// `err2out` on stderr gets a duplicate of the stdout handle, or the
    /// parent's stdout when stdout is inherited.
    pub fn open(&self) -> io::Result<StdioTriple> {
        let stdin = match self.stdin() {
            Redirect::Read(path) => Stdio::from(File::open(path).map_err(|e| with_path(e, path))?),
            _ => Stdio::inherit(),
        };

        let stdout_file = open_output(self.stdout())?;
        let stderr = match self.stderr() {
            Redirect::Err2Out => match &stdout_file {
                Some(file) => Stdio::from(file.try_clone()?),
                None => Stdio::from(io::stdout()),
            },
            other => open_output(other)?
                .map(Stdio::from)
                .unwrap_or_else(Stdio::inherit),
        };
        let stdout = stdout_file.map(Stdio::from).unwrap_or_else(Stdio::inherit);

        tracing::debug!(target: "buildio.redirect", "stdio handles opened");
        Ok(StdioTriple {
            stdin,
            stdout,
            stderr,
        })
    }
}

fn open_output(redirect: &Redirect) -> io::Result<Option<File>> {
    let (path, append) = match redirect {
        Redirect::Write(path) => (path, false),
        Redirect::Append(path) => (path, true),
        _ => return Ok(None),
    };

    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options
        .open(path)
        .map(Some)
        .map_err(|e| with_path(e, path))
}

fn with_path(e: io::Error, path: &Path) -> io::Error {
    io::Error::new(e.kind(), format!("{}: {e}", path.display()))
}
