//! Stream output for standard streams and files

use crate::core::{LoggerError, OutputSink, Result, Severity};
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

enum Target {
    Stdout,
    Stderr,
    File { path: PathBuf, file: File },
}

/// Writes raw lines to stdout, stderr or a file opened at construction.
///
/// Files are opened for reading and appending, so lines always land at the
/// end even after a rewind. The handle is released on `close` or on drop.
///
/// # Examples
///
/// ```no_run
/// use rust_structured_logger::outputs::StreamOutput;
/// use rust_structured_logger::Severity;
///
/// let output = StreamOutput::file(Severity::Info, "/var/log/app.jsonl").unwrap();
/// ```
pub struct StreamOutput {
    level: Severity,
    name: String,
    target: Option<Target>,
}

impl StreamOutput {
    pub fn stdout(level: Severity) -> Self {
        Self {
            level,
            name: "stdout".to_string(),
            target: Some(Target::Stdout),
        }
    }

    pub fn stderr(level: Severity) -> Self {
        Self {
            level,
            name: "stderr".to_string(),
            target: Some(Target::Stderr),
        }
    }

    /// Open (creating if needed) a file for appending
    pub fn file(level: Severity, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            level,
            name: format!("file:{}", path.display()),
            target: Some(Target::File { path, file }),
        })
    }

    /// Open a named stream: `stdout`, `stderr`, or a file path
    pub fn open(level: Severity, stream: &str) -> Result<Self> {
        match stream {
            "stdout" | "-" => Ok(Self::stdout(level)),
            "stderr" => Ok(Self::stderr(level)),
            path => Self::file(level, path),
        }
    }

    /// Path of the backing file, if any
    pub fn path(&self) -> Option<&Path> {
        match &self.target {
            Some(Target::File { path, .. }) => Some(path),
            _ => None,
        }
    }

    fn target_mut(&mut self) -> Result<&mut Target> {
        let name = &self.name;
        self.target
            .as_mut()
            .ok_or_else(|| LoggerError::output_closed(name.clone()))
    }
}

fn write_file(file: &mut File, line: &str) -> io::Result<()> {
    #[cfg(feature = "file-lock")]
    {
        fs2::FileExt::lock_exclusive(&*file)?;
        let written = file.write_all(line.as_bytes());
        fs2::FileExt::unlock(&*file)?;
        written
    }
    #[cfg(not(feature = "file-lock"))]
    {
        file.write_all(line.as_bytes())
    }
}

impl OutputSink for StreamOutput {
    fn write(&mut self, line: &str) -> Result<()> {
        match self.target_mut()? {
            Target::Stdout => io::stdout().lock().write_all(line.as_bytes())?,
            Target::Stderr => io::stderr().lock().write_all(line.as_bytes())?,
            Target::File { path, file } => write_file(file, line).map_err(|e| {
                LoggerError::io_operation(
                    "writing log line",
                    format!("cannot write to '{}'", path.display()),
                    e,
                )
            })?,
        }
        Ok(())
    }

    fn rewind(&mut self) -> Result<()> {
        if let Target::File { file, .. } = self.target_mut()? {
            file.seek(SeekFrom::Start(0))?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.target {
            Some(Target::Stdout) => io::stdout().flush()?,
            Some(Target::Stderr) => io::stderr().flush()?,
            Some(Target::File { file, .. }) => file.flush()?,
            None => {}
        }
        Ok(())
    }

    fn close(&mut self) -> Result<bool> {
        if self.target.is_none() {
            return Ok(false);
        }
        let flushed = self.flush();
        self.target = None;
        flushed.map(|()| true)
    }

    fn is_closed(&self) -> bool {
        self.target.is_none()
    }

    fn level(&self) -> Severity {
        self.level
    }

    fn set_severity(&mut self, level: Severity) {
        self.level = level;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for StreamOutput {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to close output '{}': {}", self.name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_write() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.txt");

        let mut output = StreamOutput::file(Severity::Debug, &path)?;
        output.write("test")?;
        output.flush()?;

        assert_eq!(fs::read_to_string(&path)?, "test");
        assert_eq!(output.path(), Some(path.as_path()));
        Ok(())
    }

    #[test]
    fn test_rewind_keeps_appending() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rewind.txt");
        fs::write(&path, "existing\n")?;

        let mut output = StreamOutput::file(Severity::Debug, &path)?;
        output.rewind()?;
        output.write("first\n")?;
        output.rewind()?;
        output.write("second\n")?;
        output.close()?;

        assert_eq!(fs::read_to_string(&path)?, "existing\nfirst\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_close_is_idempotent() -> Result<()> {
        let dir = tempdir()?;
        let mut output = StreamOutput::file(Severity::Debug, dir.path().join("close.txt"))?;

        assert!(output.close()?);
        assert!(output.is_closed());
        assert!(!output.close()?);
        assert!(output.is_closed());
        Ok(())
    }

    #[test]
    fn test_write_after_close_fails() -> Result<()> {
        let dir = tempdir()?;
        let mut output = StreamOutput::file(Severity::Debug, dir.path().join("closed.txt"))?;
        output.close()?;

        let err = output.write("late").unwrap_err();
        assert!(matches!(err, LoggerError::OutputClosed { .. }));
        Ok(())
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        let err = StreamOutput::file(Severity::Debug, path).err().unwrap();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[test]
    fn test_standard_streams() -> Result<()> {
        let mut out = StreamOutput::open(Severity::Info, "stdout")?;
        let mut err = StreamOutput::open(Severity::Error, "stderr")?;
        assert_eq!(out.name(), "stdout");
        assert_eq!(err.name(), "stderr");
        assert!(out.path().is_none());

        out.rewind()?;
        err.rewind()?;
        assert!(out.close()?);
        assert!(!out.close()?);
        assert!(err.close()?);
        assert!(!err.close()?);
        Ok(())
    }

    #[test]
    fn test_set_level() {
        let mut output = StreamOutput::stderr(Severity::Debug);
        output.set_level("critical").unwrap();
        assert_eq!(output.level(), Severity::Critical);
        assert!(output.set_level("loud").is_err());
    }
}
