//! Wraith headless automation shell
//!
//! Glue layer for a headless WebKit-based, JavaScript-driven automation
//! tool: command-line argument parsing, script injection with CoffeeScript
//! transpilation delegation, and log/stream formatting utilities.
//!
//! # Features
//!
//! - Argument schema with enumerated `{yes,no}` options and a hook-based
//!   extension point for plugins
//! - Script lookup with a fallback library directory, shebang
//!   normalization and UTF-8 reads
//! - CoffeeScript conversion delegated to an external compiler through a
//!   process-wide, lazily constructed converter
//! - Severity-routed, ISO-8601-timestamped message formatting wired into
//!   the `log` facade
//! - Replacement-on-error output stream encoding so terminal writes never
//!   fail on unencodable characters

pub mod cli;
pub mod error;
pub mod inject;
pub mod logging;
pub mod stream;
pub mod transpile;

// Re-export commonly used types and functions
pub use cli::{build_command, build_command_with_hook, parse_args, Settings, Toggle};
pub use error::{Result, RunnerError};
pub use inject::{inject_script, inject_script_with, ExecutionSink, ScriptRole};
pub use logging::{MessageHandler, MessageKind, MessageLogger};
pub use stream::SafeStream;
pub use transpile::{coffee_to_js, shared_converter, CoffeeScriptConverter, Transpiler};

/// Runner version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// The text printed by `--version`: version number plus license notice.
pub fn license_text() -> String {
    format!(
        "\n  Wraith Version {VERSION}\n\
         \n\
         \x20 Copyright (C) 2026 the Wraith developers\n\
         \n\
         \x20 This program is free software: you can redistribute it and/or modify\n\
         \x20 it under the terms of the GNU General Public License as published by\n\
         \x20 the Free Software Foundation, either version 3 of the License, or\n\
         \x20 (at your option) any later version.\n\
         \n\
         \x20 This program is distributed in the hope that it will be useful,\n\
         \x20 but WITHOUT ANY WARRANTY; without even the implied warranty of\n\
         \x20 MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the\n\
         \x20 GNU General Public License for more details.\n"
    )
}
