//! In-memory output capturing lines for inspection

use crate::core::{LoggerError, OutputSink, Result, Severity};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Captured {
    lines: Vec<String>,
    rewinds: usize,
    closed: bool,
}

/// Shared view of what a [`MemoryOutput`] captured.
///
/// Stays usable after the output itself has been moved into a logger.
#[derive(Debug, Clone, Default)]
pub struct MemoryHandle {
    inner: Arc<Mutex<Captured>>,
}

impl MemoryHandle {
    pub fn last_line(&self) -> Option<String> {
        self.inner.lock().lines.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().lines.is_empty()
    }

    pub fn rewind_count(&self) -> usize {
        self.inner.lock().rewinds
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    /// Parse every captured line as a JSON object
    pub fn json_lines(&self) -> Result<Vec<serde_json::Value>> {
        self.inner
            .lock()
            .lines
            .iter()
            .map(|line| serde_json::from_str(line).map_err(LoggerError::from))
            .collect()
    }
}

/// Output that keeps every line in memory
///
/// # Example
///
/// ```
/// use rust_structured_logger::outputs::MemoryOutput;
/// use rust_structured_logger::{Logger, Severity};
///
/// let output = MemoryOutput::new(Severity::Debug);
/// let captured = output.handle();
///
/// let mut logger = Logger::builder("svc").output(output).build().unwrap();
/// logger.info("hello").unwrap();
///
/// assert_eq!(captured.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryOutput {
    level: Severity,
    captured: MemoryHandle,
}

impl MemoryOutput {
    pub fn new(level: Severity) -> Self {
        Self {
            level,
            captured: MemoryHandle::default(),
        }
    }

    pub fn handle(&self) -> MemoryHandle {
        self.captured.clone()
    }
}

impl OutputSink for MemoryOutput {
    fn write(&mut self, line: &str) -> Result<()> {
        let mut captured = self.captured.inner.lock();
        if captured.closed {
            return Err(LoggerError::output_closed("memory"));
        }
        captured.lines.push(line.to_string());
        Ok(())
    }

    fn rewind(&mut self) -> Result<()> {
        self.captured.inner.lock().rewinds += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<bool> {
        let mut captured = self.captured.inner.lock();
        Ok(!std::mem::replace(&mut captured.closed, true))
    }

    fn is_closed(&self) -> bool {
        self.captured.is_closed()
    }

    fn level(&self) -> Severity {
        self.level
    }

    fn set_severity(&mut self, level: Severity) {
        self.level = level;
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture() {
        let mut output = MemoryOutput::new(Severity::Debug);
        let handle = output.handle();

        output.rewind().unwrap();
        output.write("one\n").unwrap();
        output.write("two\n").unwrap();

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.last_line().as_deref(), Some("two\n"));
        assert_eq!(handle.rewind_count(), 1);
    }

    #[test]
    fn test_close_twice_and_write_after() {
        let mut output = MemoryOutput::new(Severity::Debug);
        let handle = output.handle();

        assert!(output.close().unwrap());
        assert!(!output.close().unwrap());
        assert!(handle.is_closed());
        assert!(output.write("late").is_err());
        assert!(handle.is_empty());
    }

    #[test]
    fn test_json_lines() {
        let mut output = MemoryOutput::new(Severity::Debug);
        output.write("{\"a\":1}\n").unwrap();
        let parsed = output.handle().json_lines().unwrap();
        assert_eq!(parsed[0]["a"], 1);

        output.write("not json\n").unwrap();
        assert!(output.handle().json_lines().is_err());
    }
}
