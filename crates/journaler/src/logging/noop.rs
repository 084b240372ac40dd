//! No-op logger implementation

use super::traits::Logger;
use crate::location::Location;
use crate::message::Args;
use crate::severity::Severity;

/// A logger that does nothing
///
/// Useful for testing or when a component takes a `SharedLogger` but the
/// caller wants it quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn emit_at(&self, _severity: Severity, _location: Location, _template: &str, _args: Args<'_>) {}
    fn output(&self, _label: &str, _color: &str, _template: &str, _args: Args<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::SharedLogger;
    use std::sync::Arc;

    #[test]
    fn test_noop_logger() {
        let logger: SharedLogger = Arc::new(NoOpLogger::new());

        // These should all do nothing without panicking
        logger.success("success message", &[]);
        logger.notification("notification {}", &[&1]);
        logger.warning("warning message", &[]);
        logger.error("error message", &[]);
        logger.debug("debug message", &[]);
        logger.output("Custom", "green", "custom message", &[]);
        crate::debug!(logger, "debug {}", 2);
    }
}
