//! Logging policy: a pluggable hook invoked once per send attempt.
//!
//! The client never inspects what a logger does; it only guarantees exactly
//! one [`PushLogger::log`] call per attempt, after the outcome is known.
//! Implementations must be infallible: a logger can never change the result
//! returned to the caller, so `log` takes `&self` and returns nothing.

use crate::client::ServerChanError;

#[derive(Debug)]
/// Outcome of one send attempt, as handed to the logging policy.
///
/// `code` is the remote `errno` when a reply was parsed, or
/// [`crate::domain::ERRNO_LOCAL`] for outcomes with no remote code
/// (validation failures, transport failures, cancellation).
pub struct LogEvent<'a> {
    pub send_key: &'a str,
    pub title: &'a str,
    pub code: i32,
    pub error: Option<&'a ServerChanError>,
}

/// Pluggable logging policy.
///
/// Must be safe for concurrent invocation; the client may be shared across
/// tasks. Must not panic.
pub trait PushLogger: Send + Sync {
    fn log(&self, event: &LogEvent<'_>);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op logger, for callers that manage their own observability.
///
/// This is the client default.
pub struct SilentLogger;

impl PushLogger for SilentLogger {
    fn log(&self, _event: &LogEvent<'_>) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Verbosity of [`LeveledLogger`].
pub enum LogLevel {
    /// Log nothing.
    None,
    /// Log failed attempts only, with a masked send key.
    ErrorsOnly,
    /// Log every attempt; send key and title are masked.
    MaskedAll,
    /// Log every attempt with the full send key and title.
    ///
    /// Error lines still mask the key, at every level.
    Unmasked,
}

#[derive(Debug, Clone, Copy)]
/// Built-in logger that renders line-oriented output through [`tracing`].
///
/// Failed attempts are emitted at `warn`, successes at `info`, both under the
/// `serverchan` target. The underlying subscriber is responsible for
/// serializing concurrent writes.
pub struct LeveledLogger {
    level: LogLevel,
}

impl LeveledLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Render the line for `event`, or `None` when the level suppresses it.
    ///
    /// Pure; `log` is this plus a `tracing` emit.
    fn render(&self, event: &LogEvent<'_>) -> Option<String> {
        if self.level == LogLevel::None {
            return None;
        }

        if let Some(err) = event.error {
            return Some(format!(
                "failed to send message to {}: {err}",
                mask(event.send_key)
            ));
        }

        match self.level {
            LogLevel::None | LogLevel::ErrorsOnly => None,
            LogLevel::MaskedAll => Some(format!(
                "<- {:>3} | {} | {}",
                event.code,
                mask(event.send_key),
                mask(event.title)
            )),
            LogLevel::Unmasked => Some(format!(
                "<- {:>3} | {} | {}",
                event.code, event.send_key, event.title
            )),
        }
    }
}

impl PushLogger for LeveledLogger {
    fn log(&self, event: &LogEvent<'_>) {
        let Some(line) = self.render(event) else {
            return;
        };
        if event.error.is_some() {
            tracing::warn!(target: "serverchan", code = event.code, "{line}");
        } else {
            tracing::info!(target: "serverchan", code = event.code, "{line}");
        }
    }
}

/// Redact `value`, revealing only a short prefix/suffix.
///
/// Operates on `char`s (Unicode scalar values), so multi-byte input is never
/// split mid-character. The output has the same `char` length as the input.
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 => "*".to_owned(),
        2 => format!("{}*", chars[0]),
        3 => format!("**{}", chars[2]),
        4 => format!("{}**{}", chars[0], chars[3]),
        5 => format!("{}***{}", chars[0], chars[4]),
        len => {
            let prefix: String = chars[..2].iter().collect();
            let suffix: String = chars[len - 2..].iter().collect();
            format!("{prefix}{}{suffix}", "*".repeat(len - 4))
        }
    }
}
