/*!
Dispatcher: argv -> command lookup -> handler -> exit code.

`dispatch` returns a typed `CliError`; `run` is the single place that turns
it into user-facing text on the error stream and an exit code. Terminating
the process is left to `main`.
*/

use std::io::Write;

use crate::cmd::format::{Role, StyleOptions, color, emoji_prefix};
use crate::cmd::registry::{CommandKind, find_command};
use crate::error::CliError;
use crate::{log_debug, log_error};

/// Resolve `argv[0]` and run it with `argv[1..]`.
/// No command (or an empty one) means `help`.
pub fn dispatch(argv: &[String], out: &mut dyn Write, style: &StyleOptions) -> Result<(), CliError> {
    let Some((name, args)) = argv.split_first().filter(|(name, _)| !name.is_empty()) else {
        log_debug!("no command given, showing help");
        return CommandKind::Help
            .execute(&[], out, style)
            .map_err(|detail| CliError::HandlerFailure {
                command: "help".into(),
                detail,
            });
    };

    let command = find_command(name).ok_or_else(|| CliError::UnknownCommand(name.clone()))?;
    log_debug!("resolved '{}' ({:?}) with {} arg(s)", command, command.kind, args.len());

    command
        .kind
        .execute(args, out, style)
        .map_err(|detail| CliError::HandlerFailure {
            command: command.name.to_string(),
            detail,
        })
}

/// Run and map the outcome to a process exit code (0 on success).
pub fn run(argv: &[String], out: &mut dyn Write, err: &mut dyn Write, style: &StyleOptions) -> u8 {
    let result = dispatch(argv, out, style);
    // flush failures only matter if nothing else went wrong
    let flushed = out.flush();
    match result {
        Ok(()) => match flushed {
            Ok(()) => 0,
            Err(e) => {
                log_error!("failed to flush output: {e}");
                1
            }
        },
        Err(e) => {
            report(&e, err, style);
            e.exit_code()
        }
    }
}

fn report(e: &CliError, err: &mut dyn Write, style: &StyleOptions) {
    // nowhere left to report a failed write to the error stream
    let _ = writeln!(
        err,
        "{}{}",
        emoji_prefix("error", style),
        color(Role::Error, e.to_string(), style)
    );
    if let Some(hint) = e.hint() {
        let _ = writeln!(err, "{hint}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Captured {
        code: u8,
        out: String,
        err: String,
    }

    fn invoke(argv: &[&str]) -> Captured {
        let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(&argv, &mut out, &mut err, &StyleOptions::plain());
        Captured {
            code,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    #[test]
    fn empty_argv_matches_help() {
        let none = invoke(&[]);
        let help = invoke(&["help"]);
        assert_eq!(none.code, 0);
        assert_eq!(none.out, help.out);
        assert!(none.out.contains("Available commands:"));
        assert!(none.err.is_empty());
    }

    #[test]
    fn empty_command_name_is_help() {
        assert_eq!(invoke(&[""]).out, invoke(&["help"]).out);
    }

    #[test]
    fn unknown_command_exits_non_zero() {
        let r = invoke(&["bogus"]);
        assert_eq!(r.code, 1);
        assert!(r.out.is_empty());
        assert!(r.err.contains("Unknown command: bogus"));
        assert!(r.err.contains("Run 'vitron help' for available commands."));
    }

    #[test]
    fn command_names_are_case_sensitive() {
        assert_eq!(invoke(&["Version"]).code, 1);
    }

    #[test]
    fn hello_receives_remaining_args() {
        let r = invoke(&["hello", "Alice"]);
        assert_eq!(r.code, 0);
        assert_eq!(r.out, "Hello, Alice!\n");
        assert_eq!(invoke(&["hello"]).out, "Hello, World!\n");
    }

    #[test]
    fn version_prints_identifier() {
        let r = invoke(&["version", "ignored"]);
        assert_eq!(r.code, 0);
        assert_eq!(r.out, "Vitron CLI v1.0.0\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn handler_failure_is_caught_and_reported() {
        let argv = vec!["hello".to_string(), "Bob".to_string()];
        let mut err = Vec::new();
        let code = run(&argv, &mut BrokenPipe, &mut err, &StyleOptions::plain());
        let err = String::from_utf8(err).unwrap();
        assert_eq!(code, 1);
        assert!(err.starts_with("Error executing command 'hello': "));
        assert!(err.contains("pipe closed"));
    }

    #[test]
    fn dispatch_returns_typed_errors() {
        let mut out = Vec::new();
        let argv = vec!["nope".to_string()];
        let e = dispatch(&argv, &mut out, &StyleOptions::plain()).unwrap_err();
        assert!(matches!(e, CliError::UnknownCommand(ref n) if n == "nope"));
    }
}
