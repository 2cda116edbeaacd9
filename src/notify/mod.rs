//! Update notification: turning a change report into a user-facing alert.

use crate::diff::ChangeReport;
use crate::error::NotifyError;
use std::io::{self, Write};

mod formatter;

pub use formatter::ReportFormatter;

/// A handler capability for surfacing detected recipe updates.
///
/// The decision layer never renders anything itself; it hands every
/// non-empty report to whichever notifier the session was built with. Tests
/// inject a recording stub, applications inject a console or UI surface.
///
/// Callers must not pass empty reports; the notifier does not re-validate.
pub trait UpdateNotifier {
    /// Presents the report to the user.
    ///
    /// A failed render must surface as [`NotifyError::DisplayUnavailable`],
    /// never be swallowed: a silently missed notification defeats the point
    /// of detecting the change.
    fn show_update_alert(&mut self, report: &ChangeReport) -> Result<(), NotifyError>;
}

/// Renders alerts as text onto any [`Write`] sink.
pub struct ConsoleNotifier<W: Write> {
    sink: W,
}

impl ConsoleNotifier<io::Stdout> {
    /// A notifier writing to standard output.
    pub fn stdout() -> Self {
        ConsoleNotifier { sink: io::stdout() }
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(sink: W) -> Self {
        ConsoleNotifier { sink }
    }

    /// Consumes the notifier and returns its sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> UpdateNotifier for ConsoleNotifier<W> {
    fn show_update_alert(&mut self, report: &ChangeReport) -> Result<(), NotifyError> {
        let text = ReportFormatter::format_report(report);
        writeln!(self.sink, "{}", text)
            .map_err(|e| NotifyError::DisplayUnavailable(e.to_string()))
    }
}
