//! Output that discards every line

use crate::core::{OutputSink, Result, Severity};

/// Accepts lines and drops them.
///
/// Installed automatically when a logger is built without outputs.
#[derive(Debug, Clone)]
pub struct NoopOutput {
    level: Severity,
    closed: bool,
}

impl NoopOutput {
    pub fn new(level: Severity) -> Self {
        Self {
            level,
            closed: false,
        }
    }
}

impl Default for NoopOutput {
    fn default() -> Self {
        Self::new(Severity::Debug)
    }
}

impl OutputSink for NoopOutput {
    fn write(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<bool> {
        Ok(!std::mem::replace(&mut self.closed, true))
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn level(&self) -> Severity {
        self.level
    }

    fn set_severity(&mut self, level: Severity) {
        self.level = level;
    }

    fn name(&self) -> &str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lowest_threshold() {
        let output = NoopOutput::default();
        assert_eq!(output.level(), Severity::Debug);
        assert!(output.accepts(Severity::Debug));
    }

    #[test]
    fn test_write_and_rewind_discard() {
        let mut output = NoopOutput::new(Severity::Info);
        output.rewind().unwrap();
        output.write("anything\n").unwrap();
        output.flush().unwrap();
    }

    #[test]
    fn test_close_twice() {
        let mut output = NoopOutput::default();
        assert!(output.close().unwrap());
        assert!(!output.close().unwrap());
        assert!(output.is_closed());
    }

    #[test]
    fn test_set_level_validates() {
        let mut output = NoopOutput::default();
        output.set_level("ERROR").unwrap();
        assert_eq!(output.level(), Severity::Error);

        let err = output.set_level("verbose").unwrap_err();
        assert!(err.is_invalid_level());
        assert_eq!(output.level(), Severity::Error);
    }
}
