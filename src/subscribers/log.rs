//! # LogWriter — simple record printer
//!
//! A minimal subscriber that prints incoming [`LogRecord`]s to stdout.
//! Use it for tests or demos; real hosts already see the lines in the
//! platform log.
//!
//! ## Example output
//! ```text
//! 2024-03-09 07:05:01.042 I/Network: connected
//! 2024-03-09 07:05:01.377 E/Network: request failed
//!     caused by: connection reset
//! ```

use crate::events::LogRecord;
use crate::subscribers::Subscribe;

/// Record writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders one record the way [`Subscribe::on_event`] prints it.
    pub fn render(rec: &LogRecord) -> String {
        match rec.stack_trace.as_deref() {
            Some(trace) => {
                let mut out = rec.to_string();
                for line in trace.lines() {
                    out.push_str("\n    ");
                    out.push_str(line);
                }
                out
            }
            None => rec.to_string(),
        }
    }
}

impl Subscribe<LogRecord> for LogWriter {
    fn on_event(&self, rec: &LogRecord) {
        println!("{}", Self::render(rec));
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
