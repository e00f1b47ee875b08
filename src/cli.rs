//! Command-line interface for the wraith runner

use crate::{license_text, DESCRIPTION, NAME};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum};
use std::path::PathBuf;

/// Two-valued choice used by the enumerated `{yes,no}` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    Yes,
    No,
}

impl Toggle {
    pub fn is_yes(self) -> bool {
        matches!(self, Toggle::Yes)
    }
}

/// Parsed command-line settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub script: Option<PathBuf>,
    pub disk_cache: bool,
    pub ignore_ssl_errors: bool,
    pub load_images: bool,
    pub load_plugins: bool,
    pub local_access_remote: bool,
    pub proxy: Option<String>,
    pub verbose: bool,
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            script: matches.get_one::<String>("script").map(PathBuf::from),
            disk_cache: toggle_value(matches, "disk-cache"),
            ignore_ssl_errors: toggle_value(matches, "ignore-ssl-errors"),
            load_images: toggle_value(matches, "load-images"),
            load_plugins: toggle_value(matches, "load-plugins"),
            local_access_remote: toggle_value(matches, "local-access-remote"),
            proxy: matches.get_one::<String>("proxy").cloned(),
            verbose: matches.get_flag("verbose"),
        }
    }
}

fn toggle_value(matches: &ArgMatches, id: &str) -> bool {
    matches
        .get_one::<Toggle>(id)
        .is_some_and(|toggle| toggle.is_yes())
}

fn toggle_arg(name: &'static str, default: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("yes|no")
        .value_parser(clap::value_parser!(Toggle))
        .default_value(default)
        .help(help)
}

/// Build the argument schema.
pub fn build_command() -> Command {
    Command::new(NAME)
        .about(DESCRIPTION)
        .override_usage(format!(
            "{NAME} [options] script.[js|coffee] [script argument [script argument ...]]"
        ))
        .version(license_text())
        .disable_version_flag(true)
        .arg(
            Arg::new("script")
                .value_name("script.[js|coffee]")
                .help("The script to execute, and any args to pass to it"),
        )
        .arg(toggle_arg("disk-cache", "no", "Enable disk cache"))
        .arg(toggle_arg("ignore-ssl-errors", "no", "Ignore SSL errors"))
        .arg(toggle_arg("load-images", "yes", "Load all inlined images"))
        .arg(toggle_arg(
            "load-plugins",
            "no",
            "Load all plugins (i.e. Flash, Silverlight, ...)",
        ))
        .arg(toggle_arg(
            "local-access-remote",
            "no",
            "Local content can access remote URL",
        ))
        .arg(
            Arg::new("proxy")
                .long("proxy")
                .value_name("address:port")
                .help("Set the network proxy"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show verbose debug messages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Show this program's version and license")
                .action(ArgAction::Version),
        )
}

/// Build the argument schema and hand it to an extension hook before use.
///
/// The hook may inspect or mutate the constructed command, e.g. to register
/// additional options contributed by plugins.
pub fn build_command_with_hook<F>(hook: F) -> Command
where
    F: FnOnce(Command) -> Command,
{
    hook(build_command())
}

/// Parse the process arguments into [`Settings`].
///
/// Malformed input is reported by clap with usage text and a non-zero exit.
pub fn parse_args() -> Settings {
    let matches = build_command_with_hook(|command| command).get_matches();
    Settings::from_matches(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn settings_from(argv: &[&str]) -> Settings {
        let matches = build_command()
            .try_get_matches_from(argv)
            .expect("arguments should parse");
        Settings::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&["wraith"]);
        assert_eq!(settings.script, None);
        assert!(!settings.disk_cache);
        assert!(!settings.ignore_ssl_errors);
        assert!(settings.load_images);
        assert!(!settings.load_plugins);
        assert!(!settings.local_access_remote);
        assert_eq!(settings.proxy, None);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_explicit_options() {
        let settings = settings_from(&[
            "wraith",
            "--disk-cache",
            "yes",
            "--load-images",
            "no",
            "--proxy",
            "127.0.0.1:8080",
            "-v",
            "run.js",
        ]);
        assert_eq!(settings.script.as_deref(), Some(std::path::Path::new("run.js")));
        assert!(settings.disk_cache);
        assert!(!settings.load_images);
        assert_eq!(settings.proxy.as_deref(), Some("127.0.0.1:8080"));
        assert!(settings.verbose);
    }

    #[test]
    fn test_invalid_choice_is_a_parse_error() {
        let err = build_command()
            .try_get_matches_from(["wraith", "--disk-cache", "maybe"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_version_prints_license_and_exits_zero() {
        let err = build_command()
            .try_get_matches_from(["wraith", "--version"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert_eq!(err.exit_code(), 0);
        let rendered = err.to_string();
        assert!(rendered.contains(crate::VERSION));
        assert!(rendered.contains("Copyright"));
    }

    #[test]
    fn test_hook_can_extend_the_command() {
        let command = build_command_with_hook(|command| {
            command.arg(
                Arg::new("remote-debug")
                    .long("remote-debug")
                    .action(ArgAction::SetTrue),
            )
        });
        let matches = command
            .try_get_matches_from(["wraith", "--remote-debug"])
            .expect("hook-added option should parse");
        assert!(matches.get_flag("remote-debug"));
    }
}
