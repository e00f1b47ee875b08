//! Script lookup, normalization and injection

use crate::error::{Result, RunnerError};
use crate::transpile::{shared_converter, Transpiler};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The JavaScript-evaluation target that receives final script text.
pub trait ExecutionSink {
    fn evaluate_script(&mut self, script: &str);
}

/// Whether a script is the top-level entry script or an auxiliary script
/// injected into a page context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptRole {
    Entry,
    Injected,
}

/// The path as given if it exists, else looked up under the library directory.
fn resolve_script_path(path: &Path, library_path: &Path) -> PathBuf {
    if path.exists() {
        path.to_path_buf()
    } else {
        library_path.join(path)
    }
}

fn is_coffee(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("coffee"))
}

/// Read a script as UTF-8 text, distinguishing a missing file from a file
/// that exists but cannot be read.
fn read_script(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            RunnerError::file_not_found(path.display().to_string())
        } else {
            RunnerError::unreadable(path.display().to_string(), e)
        }
    })
}

/// Locate a script, normalize it and hand it to the execution sink.
///
/// Returns `Ok(false)` without touching the sink when the file cannot be
/// read; the failure is logged, never propagated. A transpilation failure
/// on the entry script is the one error that escapes, so the host can
/// terminate with the compiler's message.
pub fn inject_script(
    path: &Path,
    library_path: &Path,
    role: ScriptRole,
    sink: &mut dyn ExecutionSink,
) -> Result<bool> {
    inject_script_with(shared_converter(), path, library_path, role, sink)
}

pub fn inject_script_with(
    transpiler: &dyn Transpiler,
    path: &Path,
    library_path: &Path,
    role: ScriptRole,
    sink: &mut dyn ExecutionSink,
) -> Result<bool> {
    let resolved = resolve_script_path(path, library_path);

    let mut script = match read_script(&resolved) {
        Ok(script) => script,
        Err(e) => {
            log::warn!("{e}");
            return Ok(false);
        }
    };

    let coffee = is_coffee(&resolved);

    // Comment out a shebang so the JavaScript engine does not choke on it.
    // CoffeeScript sources keep theirs; the compiler strips it.
    if script.starts_with("#!") && !coffee {
        script.insert_str(0, "//");
    }

    if coffee {
        let (ok, result) = transpiler.convert(&script);
        if ok {
            script = result;
        } else if role == ScriptRole::Entry {
            return Err(RunnerError::transpile(result));
        } else {
            log::warn!("{result}");
            script.clear();
        }
    }

    sink.evaluate_script(&script);
    Ok(true)
}
