//! Wraith runner binary

use std::io::{self, Write as _};
use std::path::Path;
use std::process;

use wraith::inject::{inject_script, ExecutionSink, ScriptRole};
use wraith::stream::SafeStream;
use wraith::{cli, logging};

/// Emits final JavaScript through an encoding-safe stdout stream.
struct StdoutSink {
    out: SafeStream<io::Stdout>,
}

impl StdoutSink {
    fn new() -> Self {
        Self {
            out: SafeStream::new(io::stdout()),
        }
    }
}

impl ExecutionSink for StdoutSink {
    fn evaluate_script(&mut self, script: &str) {
        if self.out.write_str(script).and_then(|_| self.out.flush()).is_err() {
            log::warn!("cannot write script to stdout");
        }
    }
}

fn main() {
    let settings = cli::parse_args();

    if logging::init(settings.verbose).is_err() {
        let _ = writeln!(io::stderr(), "logger already initialized");
    }
    log::debug!(
        "settings: disk-cache={} ignore-ssl-errors={} load-images={} load-plugins={} \
         local-access-remote={} proxy={:?}",
        settings.disk_cache,
        settings.ignore_ssl_errors,
        settings.load_images,
        settings.load_plugins,
        settings.local_access_remote,
        settings.proxy,
    );

    let Some(script) = settings.script else {
        let mut command = cli::build_command();
        let _ = command.print_help();
        process::exit(1);
    };

    // Auxiliary scripts are looked up next to the entry script.
    let library_path = script
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let mut sink = StdoutSink::new();
    match inject_script(&script, &library_path, ScriptRole::Entry, &mut sink) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            let _ = writeln!(io::stderr(), "{e}");
            process::exit(1);
        }
    }
}
