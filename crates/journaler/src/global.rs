//! Process-wide default journal
//!
//! Libraries should take a `Journal` or `SharedLogger` from their caller.
//! These functions are for the outermost layer of an application: the entry
//! point may `install` its own journal once, otherwise the first use creates
//! one over stdout from the user config file and environment.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::config::JournalConfig;
use crate::error::{JournalError, JournalResult};
use crate::journal::Journal;
use crate::journaler::Journaler;
use crate::location::Location;
use crate::logging::Logger;
use crate::message::Args;

static DEFAULT: OnceCell<Arc<Journal>> = OnceCell::new();

/// Install `journal` as the process-wide default.
///
/// Fails once a default exists, whether installed or created on first use.
pub fn install(journal: Arc<Journal>) -> JournalResult<()> {
    DEFAULT.set(journal).map_err(|_| JournalError::AlreadyInitialized)
}

/// The process-wide journal
pub fn journal() -> &'static Arc<Journal> {
    DEFAULT.get_or_init(|| {
        // An unreadable config file falls back to the defaults
        let config = JournalConfig::load_user().unwrap_or_default().apply_env();
        Arc::new(Journal::from(config))
    })
}

/// Create a `Journaler` on the default journal
pub fn new<I, S>(scopes: I) -> Journaler
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    journal().journaler(scopes)
}

/// Set a label on the default journal
pub fn set_label(key: &str, text: &str) -> bool {
    journal().set_label(key, text)
}

/// Log a success message
pub fn success(template: &str, args: Args<'_>) {
    journal().success(template, args);
}

/// Log a notification
pub fn notification(template: &str, args: Args<'_>) {
    journal().notification(template, args);
}

/// Log a warning
pub fn warning(template: &str, args: Args<'_>) {
    journal().warning(template, args);
}

/// Log an error
pub fn error(template: &str, args: Args<'_>) {
    journal().error(template, args);
}

/// Log a debug message located at the caller
#[track_caller]
pub fn debug(template: &str, args: Args<'_>) {
    journal().debug_at(Location::caller(), template, args);
}

/// Log with a custom label and color name
pub fn output(label: &str, color: &str, template: &str, args: Args<'_>) {
    journal().output(label, color, template, args);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_shared() {
        let first = journal();
        let second = journal();
        assert!(Arc::ptr_eq(first, second));

        let log = new(["Main service", "Sub service"]);
        assert!(Arc::ptr_eq(log.journal(), first));
        assert_eq!(log.prefix(), "Main service :: Sub service :: ");
    }

    #[test]
    fn test_install_after_first_use() {
        journal();
        let result = install(Arc::new(Journal::stdout()));
        assert!(matches!(result, Err(JournalError::AlreadyInitialized)));
    }

    #[test]
    fn test_set_unknown_label() {
        assert!(!set_label("bogus", "X"));
    }

    #[test]
    fn test_root_functions() {
        // Just make sure it doesn't panic
        success("Database entry posted", &[]);
        notification("CPU temperatures are at {}*C", &[&40]);
        warning("Update to remote server has failed", &[]);
        error("Danger, Will Robinson!", &[]);
        debug("{}", &[&"foo=bar"]);
        output("Compliment", "green", "You smell nice.", &[]);
    }
}
