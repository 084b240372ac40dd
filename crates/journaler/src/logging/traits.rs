//! Logger trait definition

use std::sync::Arc;

use crate::location::Location;
use crate::message::Args;
use crate::severity::Severity;

/// Leveled, labeled logging
///
/// Implementations:
/// - `Journal`: renders labels and writes to its sink
/// - `Journaler`: prefixes every body, then forwards to its `Journal`
/// - `NoOpLogger`: silent logger for testing
///
/// Only `emit_at` and `output` are required. The leveled methods capture the
/// call site with `#[track_caller]`, so debug lines point at the code that
/// called them however many handles sit in between.
pub trait Logger: Send + Sync {
    /// Write one line for `severity`; `location` is only rendered for debug
    fn emit_at(&self, severity: Severity, location: Location, template: &str, args: Args<'_>);

    /// Write one line with a per-call label and color name
    fn output(&self, label: &str, color: &str, template: &str, args: Args<'_>);

    #[track_caller]
    fn emit(&self, severity: Severity, template: &str, args: Args<'_>) {
        self.emit_at(severity, Location::caller(), template, args);
    }

    /// Log a success message
    fn success(&self, template: &str, args: Args<'_>) {
        self.emit(Severity::Success, template, args);
    }

    /// Log a notification
    fn notification(&self, template: &str, args: Args<'_>) {
        self.emit(Severity::Notification, template, args);
    }

    /// Log a warning
    fn warning(&self, template: &str, args: Args<'_>) {
        self.emit(Severity::Warning, template, args);
    }

    /// Log an error
    fn error(&self, template: &str, args: Args<'_>) {
        self.emit(Severity::Error, template, args);
    }

    /// Log a debug message annotated with the caller's file and line
    #[track_caller]
    fn debug(&self, template: &str, args: Args<'_>) {
        self.emit_at(Severity::Debug, Location::caller(), template, args);
    }

    /// Log a debug message at an explicit location
    fn debug_at(&self, location: Location, template: &str, args: Args<'_>) {
        self.emit_at(Severity::Debug, location, template, args);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn emit_at(&self, severity: Severity, location: Location, template: &str, args: Args<'_>) {
        (**self).emit_at(severity, location, template, args);
    }

    fn output(&self, label: &str, color: &str, template: &str, args: Args<'_>) {
        (**self).output(label, color, template, args);
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Log a success message with `format!` arguments
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.success(&::std::format!($($arg)+), &[])
    }};
}

/// Log a notification with `format!` arguments
#[macro_export]
macro_rules! notification {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.notification(&::std::format!($($arg)+), &[])
    }};
}

/// Log a warning with `format!` arguments
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.warning(&::std::format!($($arg)+), &[])
    }};
}

/// Log an error with `format!` arguments
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.error(&::std::format!($($arg)+), &[])
    }};
}

/// Log a debug message with `format!` arguments, located at the macro call
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.debug_at($crate::Location::caller(), &::std::format!($($arg)+), &[])
    }};
}

/// Log with a custom label and color name, using `format!` arguments
#[macro_export]
macro_rules! output {
    ($logger:expr, $label:expr, $color:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.output($label, $color, &::std::format!($($arg)+), &[])
    }};
}
