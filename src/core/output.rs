//! Output trait for log line destinations

use super::error::Result;
use super::log_level::{self, Severity};

/// Destination for formatted log lines, gated by a minimum severity.
///
/// `close` must be idempotent: it returns `Ok(true)` when the call released
/// the underlying resource and `Ok(false)` when the output was already
/// closed.
pub trait OutputSink: Send {
    fn write(&mut self, line: &str) -> Result<()>;

    /// Move the write position back to the start, where supported
    fn rewind(&mut self) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<bool>;

    fn is_closed(&self) -> bool;

    /// Current minimum severity
    fn level(&self) -> Severity;

    fn set_severity(&mut self, level: Severity);

    /// Set the minimum severity from a level string
    fn set_level(&mut self, level: &str) -> Result<()> {
        let severity = log_level::validate(level)?;
        self.set_severity(severity);
        Ok(())
    }

    fn name(&self) -> &str;

    /// Whether a message at `level` passes this output's threshold
    fn accepts(&self, level: Severity) -> bool {
        level.passes(self.level())
    }
}
