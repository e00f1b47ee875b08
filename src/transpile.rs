//! CoffeeScript-to-JavaScript transpilation delegation

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

/// Converts an alternate scripting dialect into executable JavaScript.
///
/// `convert` returns `(true, javascript)` on success and
/// `(false, error_message)` on failure; it never panics.
pub trait Transpiler {
    fn convert(&self, source: &str) -> (bool, String);
}

/// Delegates conversion to an external CoffeeScript compiler executable.
///
/// The source is fed over stdin and compiled JavaScript is read back from
/// stdout; compiler diagnostics on stderr become the failure message.
pub struct CoffeeScriptConverter {
    command: String,
    args: Vec<String>,
}

impl CoffeeScriptConverter {
    pub fn new() -> Self {
        Self::with_command("coffee", ["--compile", "--stdio", "--bare"])
    }

    /// Use a different compiler executable, e.g. `npx coffee`.
    pub fn with_command<I, S>(command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for CoffeeScriptConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Transpiler for CoffeeScriptConverter {
    fn convert(&self, source: &str) -> (bool, String) {
        let child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match child {
            Ok(child) => child,
            Err(e) => {
                return (
                    false,
                    format!("cannot launch CoffeeScript compiler '{}': {}", self.command, e),
                );
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(source.as_bytes()) {
                let _ = child.kill();
                let _ = child.wait();
                return (
                    false,
                    format!("cannot feed source to '{}': {}", self.command, e),
                );
            }
        }

        match child.wait_with_output() {
            Ok(output) if output.status.success() => {
                (true, String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
                if message.is_empty() {
                    (false, format!("'{}' exited with {}", self.command, output.status))
                } else {
                    (false, message)
                }
            }
            Err(e) => (false, format!("'{}' failed: {}", self.command, e)),
        }
    }
}

static CONVERTER: OnceLock<CoffeeScriptConverter> = OnceLock::new();

/// The process-wide converter instance.
///
/// Only one converter survives for the whole life of the process; the first
/// call constructs it and every later call reuses it.
pub fn shared_converter() -> &'static CoffeeScriptConverter {
    CONVERTER.get_or_init(CoffeeScriptConverter::new)
}

/// Convert CoffeeScript source with the shared converter.
pub fn coffee_to_js(source: &str) -> (bool, String) {
    shared_converter().convert(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_converter_is_a_singleton() {
        let first = shared_converter();
        let second = shared_converter();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_missing_compiler_reports_failure() {
        let converter =
            CoffeeScriptConverter::with_command("wraith-no-such-compiler", ["--compile"]);
        let (ok, message) = converter.convert("x = 1");
        assert!(!ok);
        assert!(message.contains("wraith-no-such-compiler"));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_conversion_returns_stdout() {
        // `cat` stands in for a compiler that echoes its input back.
        let converter = CoffeeScriptConverter::with_command("cat", Vec::<String>::new());
        let (ok, result) = converter.convert("x = 1\n");
        assert!(ok);
        assert_eq!(result, "x = 1\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_compiler_stderr_becomes_the_error_message() {
        let converter = CoffeeScriptConverter::with_command(
            "sh",
            ["-c", "cat >/dev/null; echo 'Parse error on line 1' >&2; exit 1"],
        );
        let (ok, message) = converter.convert("x = = 1\n");
        assert!(!ok);
        assert_eq!(message, "Parse error on line 1");
    }
}
