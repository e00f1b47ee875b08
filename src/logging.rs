//! Timestamped message formatting and routing

use crate::stream::SafeStream;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::io::{self, Write};
use std::time::SystemTime;

/// Message severity, dispatched by an explicit match in the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Debug,
    Warning,
    Critical,
    Fatal,
}

impl MessageKind {
    pub fn label(self) -> &'static str {
        match self {
            MessageKind::Debug => "DEBUG",
            MessageKind::Warning => "WARNING",
            MessageKind::Critical => "CRITICAL",
            MessageKind::Fatal => "FATAL",
        }
    }
}

/// Format one log line as `<ISO-8601 timestamp> [<LEVEL>] <message>`.
pub fn format_line(kind: MessageKind, message: &str, at: SystemTime) -> String {
    format!(
        "{} [{}] {}",
        humantime::format_rfc3339_seconds(at),
        kind.label(),
        message
    )
}

/// Routes formatted messages to the standard streams.
///
/// Debug messages print to stdout only when verbose; Warning, Critical and
/// Fatal always print to stderr. Fatal does not terminate the process —
/// that is the host's call.
pub struct MessageHandler {
    verbose: bool,
}

impl MessageHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn process(&self, kind: MessageKind, message: &str) {
        let mut out = SafeStream::new(io::stdout());
        let mut err = SafeStream::new(io::stderr());
        self.write_to(kind, message, SystemTime::now(), &mut out, &mut err);
    }

    fn write_to(
        &self,
        kind: MessageKind,
        message: &str,
        at: SystemTime,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) {
        let line = format_line(kind, message, at);
        match kind {
            MessageKind::Debug => {
                if self.verbose {
                    let _ = writeln!(out, "{line}");
                }
            }
            MessageKind::Warning | MessageKind::Critical | MessageKind::Fatal => {
                let _ = writeln!(err, "{line}");
            }
        }
    }
}

/// Adapter that routes the `log` facade through a [`MessageHandler`].
pub struct MessageLogger {
    handler: MessageHandler,
}

impl MessageLogger {
    pub fn new(verbose: bool) -> Self {
        Self {
            handler: MessageHandler::new(verbose),
        }
    }
}

fn kind_for(level: log::Level) -> MessageKind {
    match level {
        log::Level::Error => MessageKind::Critical,
        log::Level::Warn => MessageKind::Warning,
        log::Level::Info | log::Level::Debug | log::Level::Trace => MessageKind::Debug,
    }
}

impl log::Log for MessageLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.handler
            .process(kind_for(record.level()), &record.args().to_string());
    }

    fn flush(&self) {}
}

/// Install a [`MessageLogger`] as the process-wide `log` backend.
pub fn init(verbose: bool) -> std::result::Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(MessageLogger::new(verbose)))?;
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    Ok(())
}
