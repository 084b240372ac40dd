//! Journaler
//!
//! Synchronized console journaling: leveled messages with colored labels,
//! scoped prefixes and caller locations on debug lines, written whole to any
//! `std::io::Write` sink.
//!
//! ## Lines
//!
//! ```text
//! [Success] Main service :: Sub service :: Database entry posted
//! [Debug] (/s/main.rs:12) Main service :: Sub service :: cache warm
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use journaler::{Journal, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let journal = Arc::new(Journal::new(sink.clone()));
//! journal.set_label("error", "uh oh.");
//!
//! let log = journal.journaler(["Main service", "Sub service"]);
//! log.error("{} of {} writes failed", &[&2, &5]);
//! journaler::debug!(log, "retrying in {}s", 3);
//!
//! assert_eq!(sink.lines().len(), 2);
//! ```
//!
//! Applications that want one journal everywhere can use the `global`
//! module from their entry point.

pub mod config;
pub mod error;
pub mod global;
pub mod journal;
pub mod journaler;
pub mod location;
pub mod logging;
pub mod message;
pub mod severity;
pub mod sink;

// Re-export commonly used types
pub use config::JournalConfig;
pub use error::{JournalError, JournalResult};
pub use journal::Journal;
pub use journaler::{Journaler, SCOPE_SEPARATOR};
pub use location::Location;
pub use logging::{Logger, BoxedLogger, SharedLogger, NoOpLogger};
pub use message::Args;
pub use severity::{ColorMode, LabelColor, Severity};
pub use sink::MemorySink;
