//! The journal: label table, sink and the lock serializing both

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::JournalConfig;
use crate::error::JournalResult;
use crate::journaler::Journaler;
use crate::location::Location;
use crate::logging::Logger;
use crate::message::{self, Args};
use crate::severity::{render_label, ColorMode, LabelColor, Severity};

/// Back-bone of every `Journaler`: owns the sink and keeps writes whole.
///
/// One lock covers the label table and the sink, and it is held from the
/// label read through the end of the write, so concurrent lines never
/// interleave and a label change never lands in the middle of a line.
/// Write errors are dropped; emitting never fails.
///
/// ```
/// use journaler::{Journal, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let journal = Journal::new(sink.clone());
/// journal.success("Database entry posted", &[]);
///
/// let line = console::strip_ansi_codes(&sink.contents()).into_owned();
/// assert_eq!(line, "[Success] Database entry posted\n");
/// ```
pub struct Journal {
    state: Mutex<JournalState>,
}

struct JournalState {
    sink: Box<dyn Write + Send>,
    texts: [String; 5],
    labels: [String; 5],
    color: ColorMode,
    debug: bool,
}

impl JournalState {
    fn render_labels(&mut self) {
        for severity in Severity::ALL {
            let i = severity.index();
            self.labels[i] = render_label(&self.texts[i], severity.color(), self.color);
        }
    }

    fn write_line(&mut self, line: &str) {
        let _ = self.sink.write_all(line.as_bytes());
        let _ = self.sink.flush();
    }
}

impl Journal {
    /// Create a journal over `sink` with the default labels
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self::with_config(sink, &JournalConfig::default())
    }

    /// Create a journal over standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Create a journal over `sink` with configured labels, color mode and
    /// debug switch
    pub fn with_config(sink: impl Write + Send + 'static, config: &JournalConfig) -> Self {
        let texts = Severity::ALL.map(|severity| config.label_text(severity).to_string());
        let mut state = JournalState {
            sink: Box::new(sink),
            texts,
            labels: Default::default(),
            color: config.color,
            debug: config.debug,
        };
        state.render_labels();

        Self {
            state: Mutex::new(state),
        }
    }

    /// Set the label text for a severity key.
    ///
    /// Returns `false` and leaves every label alone when `key` is not one of
    /// `success`, `notification`, `warning`, `error` or `debug`.
    pub fn set_label(&self, key: &str, text: &str) -> bool {
        self.try_set_label(key, text).is_ok()
    }

    /// Like `set_label`, but reports the unknown key
    pub fn try_set_label(&self, key: &str, text: &str) -> JournalResult<()> {
        let severity: Severity = key.parse()?;
        self.set_severity_label(severity, text);
        Ok(())
    }

    pub fn set_severity_label(&self, severity: Severity, text: &str) {
        let mut state = self.state.lock();
        let i = severity.index();
        state.labels[i] = render_label(text, severity.color(), state.color);
        state.texts[i] = text.to_string();
    }

    /// Currently rendered label, brackets and styling included
    pub fn label(&self, severity: Severity) -> String {
        self.state.lock().labels[severity.index()].clone()
    }

    /// Change the color mode and re-render every label
    pub fn set_color_mode(&self, color: ColorMode) {
        let mut state = self.state.lock();
        state.color = color;
        state.render_labels();
    }

    pub fn color_mode(&self) -> ColorMode {
        self.state.lock().color
    }

    /// Turn debug lines on or off
    pub fn set_debug_enabled(&self, enabled: bool) {
        self.state.lock().debug = enabled;
    }

    pub fn debug_enabled(&self) -> bool {
        self.state.lock().debug
    }

    /// Create a `Journaler` on this journal prefixing every body with `scopes`
    pub fn journaler<I, S>(self: &Arc<Self>, scopes: I) -> Journaler
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Journaler::new(Arc::clone(self), scopes)
    }

    /// Render and write one leveled line.
    ///
    /// `prefix` goes in front of the rendered body and is never treated as
    /// part of the template.
    pub(crate) fn write_entry(
        &self,
        severity: Severity,
        location: Location,
        prefix: &str,
        template: &str,
        args: Args<'_>,
    ) {
        // Rendered before locking so a value's Display may log too
        let body = message::render(template, args);

        let mut state = self.state.lock();
        if severity == Severity::Debug && !state.debug {
            return;
        }

        let label = &state.labels[severity.index()];
        let mut line = String::with_capacity(label.len() + prefix.len() + body.len() + 32);
        line.push_str(label);
        line.push(' ');
        if severity == Severity::Debug {
            let _ = write!(line, "({}) ", location);
        }
        line.push_str(prefix);
        line.push_str(&body);
        line.push('\n');

        state.write_line(&line);
    }

    /// Render and write one line with a per-call label
    pub(crate) fn write_custom(
        &self,
        label: &str,
        color: &str,
        prefix: &str,
        template: &str,
        args: Args<'_>,
    ) {
        let body = message::render(template, args);

        let mut state = self.state.lock();
        let label = render_label(label, LabelColor::from_name(color), state.color);
        let line = format!("{} {}{}\n", label, prefix, body);
        state.write_line(&line);
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for Journal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Journal")
            .field("labels", &state.texts)
            .field("color", &state.color)
            .field("debug", &state.debug)
            .finish_non_exhaustive()
    }
}

impl Logger for Journal {
    fn emit_at(&self, severity: Severity, location: Location, template: &str, args: Args<'_>) {
        self.write_entry(severity, location, "", template, args);
    }

    fn output(&self, label: &str, color: &str, template: &str, args: Args<'_>) {
        self.write_custom(label, color, "", template, args);
    }
}

impl From<JournalConfig> for Journal {
    fn from(config: JournalConfig) -> Self {
        Self::with_config(io::stdout(), &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;
    use crate::sink::MemorySink;
    use console::strip_ansi_codes;

    fn plain_journal() -> (Journal, MemorySink) {
        let sink = MemorySink::new();
        let config = JournalConfig::default().with_color(ColorMode::Never);
        (Journal::with_config(sink.clone(), &config), sink)
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_default_labels() {
        let (journal, _) = plain_journal();
        assert_eq!(journal.label(Severity::Success), "[Success]");
        assert_eq!(journal.label(Severity::Notification), "[Notification]");
        assert_eq!(journal.label(Severity::Warning), "[Warning]");
        assert_eq!(journal.label(Severity::Error), "[Error]");
        assert_eq!(journal.label(Severity::Debug), "[Debug]");
    }

    #[test]
    fn test_leveled_lines() {
        let (journal, sink) = plain_journal();
        journal.success("Database entry posted", &[]);
        journal.notification("CPU temperatures are at {}*C", &[&40]);
        journal.warning("Update to remote server has failed", &[]);
        journal.error("Danger, Will Robinson!", &[]);

        assert_eq!(
            sink.contents(),
            "[Success] Database entry posted\n\
             [Notification] CPU temperatures are at 40*C\n\
             [Warning] Update to remote server has failed\n\
             [Error] Danger, Will Robinson!\n"
        );
    }

    #[test]
    fn test_every_line_has_one_newline() {
        let (journal, sink) = plain_journal();
        for severity in Severity::ALL {
            journal.emit(severity, "body", &[]);
        }

        let contents = sink.contents();
        assert_eq!(contents.matches('\n').count(), Severity::ALL.len());
        for (line, severity) in sink.lines().iter().zip(Severity::ALL) {
            assert!(line.starts_with(&journal.label(severity)));
            assert!(line.ends_with(" body"));
        }
    }

    #[test]
    fn test_colored_labels() {
        let sink = MemorySink::new();
        let journal = Journal::with_config(sink.clone(), &JournalConfig::default().with_color(ColorMode::Always));
        journal.success("Database entry posted", &[]);

        let contents = sink.contents();
        assert!(contents.starts_with(&journal.label(Severity::Success)));
        assert_ne!(journal.label(Severity::Success), "[Success]");
        assert_eq!(strip_ansi_codes(&contents), "[Success] Database entry posted\n");
    }

    #[test]
    fn test_set_label() {
        let (journal, sink) = plain_journal();
        assert!(journal.set_label("error", "uh oh."));
        journal.error("X", &[]);

        assert_eq!(sink.contents(), "[uh oh.] X\n");
    }

    #[test]
    fn test_set_unknown_label() {
        let (journal, _) = plain_journal();
        let before: Vec<_> = Severity::ALL.iter().map(|s| journal.label(*s)).collect();

        assert!(!journal.set_label("bogus", "X"));
        assert!(!journal.set_label("Error", "X"));
        assert!(matches!(
            journal.try_set_label("bogus", "X"),
            Err(JournalError::UnknownSeverity(key)) if key == "bogus"
        ));

        let after: Vec<_> = Severity::ALL.iter().map(|s| journal.label(*s)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_label_keeps_severity_color() {
        let sink = MemorySink::new();
        let journal = Journal::with_config(sink, &JournalConfig::default().with_color(ColorMode::Always));
        journal.set_severity_label(Severity::Error, "uh oh.");

        assert_eq!(
            journal.label(Severity::Error),
            render_label("uh oh.", LabelColor::Red, ColorMode::Always)
        );
    }

    #[test]
    fn test_color_mode_switch_keeps_texts() {
        let (journal, _) = plain_journal();
        journal.set_label("warning", "Careful");
        journal.set_color_mode(ColorMode::Always);

        assert_eq!(journal.color_mode(), ColorMode::Always);
        assert_eq!(strip_ansi_codes(&journal.label(Severity::Warning)), "[Careful]");
        assert_ne!(journal.label(Severity::Warning), "[Careful]");
    }

    #[test]
    fn test_configured_labels() {
        let sink = MemorySink::new();
        let config = JournalConfig::default()
            .with_color(ColorMode::Never)
            .with_label(Severity::Success, "OK");
        let journal = Journal::with_config(sink.clone(), &config);
        journal.success("done", &[]);
        journal.warning("hmm", &[]);

        assert_eq!(sink.lines(), vec!["[OK] done", "[Warning] hmm"]);
    }

    #[test]
    fn test_debug_line() {
        let (journal, sink) = plain_journal();
        let line = line!() + 1;
        journal.debug("value is {}", &[&"bar"]);

        let expected = format!(
            "[Debug] ({}:{}) value is bar\n",
            crate::location::short_file(file!()),
            line
        );
        assert_eq!(sink.contents(), expected);
    }

    #[test]
    fn test_debug_call_sites_differ() {
        let (journal, sink) = plain_journal();
        journal.debug("first", &[]);
        journal.debug("second", &[]);
        crate::debug!(journal, "third");

        let lines = sink.lines();
        assert_eq!(lines.len(), 3);
        let sites: Vec<&str> = lines
            .iter()
            .map(|line| {
                let start = line.find('(').unwrap() + 1;
                let end = line.find(')').unwrap();
                &line[start..end]
            })
            .collect();
        assert_ne!(sites[0], sites[1]);
        assert_ne!(sites[1], sites[2]);
        let file = format!("{}:", crate::location::short_file(file!()));
        assert!(sites.iter().all(|site| site.starts_with(&file)));
    }

    #[test]
    fn test_debug_through_emit() {
        let (journal, sink) = plain_journal();
        let line = line!() + 1;
        journal.emit(Severity::Debug, "via emit", &[]);

        assert!(sink.contents().contains(&format!("journal.rs:{}) via emit", line)));
    }

    #[test]
    fn test_debug_disabled() {
        let (journal, sink) = plain_journal();
        journal.set_debug_enabled(false);
        assert!(!journal.debug_enabled());

        journal.debug("hidden", &[]);
        journal.success("shown", &[]);
        assert_eq!(sink.contents(), "[Success] shown\n");
    }

    #[test]
    fn test_output() {
        let (journal, sink) = plain_journal();
        journal.output("Compliment", "green", "You smell nice.", &[]);
        journal.output("System", "", "Rebooting in {} minutes", &[&45]);

        assert_eq!(
            sink.lines(),
            vec!["[Compliment] You smell nice.", "[System] Rebooting in 45 minutes"]
        );
    }

    #[test]
    fn test_output_colors() {
        let sink = MemorySink::new();
        let journal = Journal::with_config(sink.clone(), &JournalConfig::default().with_color(ColorMode::Always));
        journal.output("Compliment", "green", "You smell nice.", &[]);

        let green = render_label("Compliment", LabelColor::Green, ColorMode::Always);
        assert_eq!(sink.contents(), format!("{} You smell nice.\n", green));

        sink.clear();
        journal.output("System", "purple", "Rebooting", &[]);
        let plain_bold = render_label("System", LabelColor::Default, ColorMode::Always);
        assert_eq!(sink.contents(), format!("{} Rebooting\n", plain_bold));
    }

    #[test]
    fn test_sink_errors_are_dropped() {
        let journal = Journal::new(FailingSink);
        journal.success("nobody hears this", &[]);
        journal.debug("or this", &[]);
        journal.output("Custom", "red", "or this", &[]);
    }

    #[test]
    fn test_concurrent_lines_stay_whole() {
        let (journal, sink) = plain_journal();
        let journal = Arc::new(journal);

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let journal = Arc::clone(&journal);
                scope.spawn(move || {
                    for i in 0..200 {
                        journal.notification("worker {} message {} {}", &[&worker, &i, &"x".repeat(64)]);
                        if i % 50 == 0 {
                            journal.set_label("notification", "Notification");
                        }
                    }
                });
            }
        });

        let lines = sink.lines();
        assert_eq!(lines.len(), 8 * 200);
        let tail = "x".repeat(64);
        for line in lines {
            assert!(line.starts_with("[Notification] worker "), "{}", line);
            assert!(line.ends_with(&tail), "{}", line);
            assert_eq!(line.matches("[Notification]").count(), 1);
        }
    }

    #[test]
    fn test_journal_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Journal>();
    }
}
