/*!
Command registry and resolver.

The registry is a static, ordered slice of `Command` descriptors. Order
only matters for the help listing; lookup is exact, case-sensitive and
returns the first match.
*/

use std::fmt;
use std::io::Write;

use anyhow::Result;

use crate::cmd::format::StyleOptions;
use crate::cmd::{hello, help, init, version};

/// One variant per built-in command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CommandKind {
    Help,
    Version,
    Hello,
    Init,
}

impl CommandKind {
    /// Run the handler for this command with the arguments after its name.
    pub fn execute(self, args: &[String], out: &mut dyn Write, style: &StyleOptions) -> Result<()> {
        match self {
            CommandKind::Help => help::execute_help(out, style),
            CommandKind::Version => version::execute_version(out),
            CommandKind::Hello => hello::execute_hello(args, out, style),
            CommandKind::Init => init::execute_init(args, out, style),
        }
    }
}

/// Static descriptor binding a command name to its description and handler.
#[derive(Debug)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub static COMMANDS: &[Command] = &[
    Command {
        name: "help",
        description: "Show help information",
        kind: CommandKind::Help,
    },
    Command {
        name: "version",
        description: "Show version information",
        kind: CommandKind::Version,
    },
    Command {
        name: "hello",
        description: "Say hello with an optional name",
        kind: CommandKind::Hello,
    },
    Command {
        name: "init",
        description: "Create a new project skeleton",
        kind: CommandKind::Init,
    },
];

pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|cmd| cmd.name)
}

/* --------------------------------- Tests ---------------------------------- */
