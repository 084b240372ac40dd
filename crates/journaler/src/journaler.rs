//! Scoped journal handles

use std::sync::Arc;

use crate::journal::Journal;
use crate::location::Location;
use crate::logging::Logger;
use crate::message::Args;
use crate::severity::Severity;

/// Separator between scope names, also closing the prefix
pub const SCOPE_SEPARATOR: &str = " :: ";

/// A `Journal` handle that prefixes every message with a scope path.
///
/// The prefix is computed once; a handle holds no other state, so clones are
/// cheap and share the journal's lock.
///
/// ```
/// use std::sync::Arc;
/// use journaler::{Journal, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let journal = Arc::new(Journal::new(sink.clone()));
/// let log = journal.journaler(["Main service", "Sub service"]);
/// log.warning("Update to remote server has failed", &[]);
///
/// let line = console::strip_ansi_codes(&sink.contents()).into_owned();
/// assert_eq!(line, "[Warning] Main service :: Sub service :: Update to remote server has failed\n");
/// ```
#[derive(Debug, Clone)]
pub struct Journaler {
    journal: Arc<Journal>,
    prefix: String,
}

impl Journaler {
    /// Create a handle on `journal` for `scopes`.
    ///
    /// An empty scope list still yields the bare separator as prefix.
    pub fn new<I, S>(journal: Arc<Journal>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            journal,
            prefix: build_prefix(String::new(), scopes),
        }
    }

    /// Create a handle on the same journal with `scopes` appended to this prefix
    pub fn child<I, S>(&self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            journal: Arc::clone(&self.journal),
            prefix: build_prefix(self.prefix.clone(), scopes),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn journal(&self) -> &Arc<Journal> {
        &self.journal
    }
}

fn build_prefix<I, S>(mut prefix: String, scopes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, scope) in scopes.into_iter().enumerate() {
        if i > 0 {
            prefix.push_str(SCOPE_SEPARATOR);
        }
        prefix.push_str(scope.as_ref());
    }
    prefix.push_str(SCOPE_SEPARATOR);
    prefix
}

impl Logger for Journaler {
    fn emit_at(&self, severity: Severity, location: Location, template: &str, args: Args<'_>) {
        self.journal.write_entry(severity, location, &self.prefix, template, args);
    }

    fn output(&self, label: &str, color: &str, template: &str, args: Args<'_>) {
        self.journal.write_custom(label, color, &self.prefix, template, args);
    }
}
