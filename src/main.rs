use std::io;
use std::process::ExitCode;

use clap::Parser;

use vitron::cmd::{self, StyleOptions};
use vitron::utils;

/// Vitron CLI - a small command dispatcher with project scaffolding.
///
/// Commands:
///   vitron help              Show help information
///   vitron version           Show version information
///   vitron hello [name]      Say hello (defaults to "World")
///   vitron init [name]       Create ./<name> (defaults to "my-vitron-project")
///
/// Global flags go before the command; everything from the command name on
/// is handed to the dispatcher untouched (clap never sees it).
///
/// Env:
///   NO_COLOR / NO_EMOJI   Plain output
#[derive(Parser, Debug)]
#[command(
    name = "vitron",
    version,
    about = "Vitron - a small command line dispatcher",
    override_usage = "vitron [OPTIONS] [COMMAND] [ARGS]...",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Disable colors and emoji
    #[arg(long)]
    no_color: bool,
}

/// Split raw process arguments at the first token that is not a flag.
///
/// The head (program name + leading flags) is parsed by clap; the tail is
/// the command name and its arguments. A bare `--` ends the flags and is
/// dropped.
fn split_at_command(mut raw: Vec<String>) -> (Vec<String>, Vec<String>) {
    let Some(pos) = raw
        .iter()
        .skip(1)
        .position(|a| a == "--" || a == "-" || !a.starts_with('-'))
        .map(|p| p + 1)
    else {
        return (raw, Vec::new());
    };
    let mut tail = raw.split_off(pos);
    if tail.first().is_some_and(|a| a == "--") {
        tail.remove(0);
    }
    (raw, tail)
}

fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let (head, argv) = split_at_command(raw);
    let cli = Cli::parse_from(head);

    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    let style = StyleOptions::detect(cli.no_color);

    let code = cmd::run(&argv, &mut io::stdout().lock(), &mut io::stderr().lock(), &style);
    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn split(args: &[&str]) -> (Vec<String>, Vec<String>) {
        split_at_command(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_yields_empty_argv() {
        let (head, argv) = split(&["vitron"]);
        assert_eq!(head, vec!["vitron"]);
        assert!(argv.is_empty());

        let (head, argv) = split(&["vitron", "-v", "--no-color"]);
        assert_eq!(head, vec!["vitron", "-v", "--no-color"]);
        assert!(argv.is_empty());
    }

    #[test]
    fn global_flags_before_command() {
        let (head, argv) = split(&["vitron", "-vv", "--no-color", "hello", "Alice"]);
        let cli = Cli::try_parse_from(head).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(!cli.quiet);
        assert_eq!(argv, vec!["hello", "Alice"]);
    }

    #[test]
    fn hyphenated_command_args_pass_through() {
        for flag in ["-v", "-q", "--no-color", "--help", "--version", "-V", "--force"] {
            let (head, argv) = split(&["vitron", "hello", flag]);
            assert_eq!(argv, vec!["hello", flag]);
            let cli = Cli::try_parse_from(head).unwrap();
            assert_eq!(cli.verbose, 0);
            assert!(!cli.quiet);
            assert!(!cli.no_color);
        }

        let (head, argv) = split(&["vitron", "-q", "init", "-q"]);
        assert!(Cli::try_parse_from(head).unwrap().quiet);
        assert_eq!(argv, vec!["init", "-q"]);
    }

    #[test]
    fn double_dash_ends_global_flags() {
        let (head, argv) = split(&["vitron", "-v", "--", "-x", "--help"]);
        assert_eq!(head, vec!["vitron", "-v"]);
        assert_eq!(argv, vec!["-x", "--help"]);
    }

    #[test]
    fn leading_help_and_version_still_go_to_clap() {
        let (head, argv) = split(&["vitron", "--help"]);
        assert!(argv.is_empty());
        let err = Cli::try_parse_from(head).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let (head, _) = split(&["vitron", "--version"]);
        let err = Cli::try_parse_from(head).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
