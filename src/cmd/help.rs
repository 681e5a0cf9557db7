/*!
`help` command: banner, usage, command table and examples.
*/

use std::io::Write;

use anyhow::Result;

use crate::cmd::format::{Role, StyleOptions, banner, color, pad_right};
use crate::cmd::registry::COMMANDS;
use crate::cmd::BIN_NAME;

/// Column the command descriptions start at (name padded to this width).
pub const NAME_COLUMN_WIDTH: usize = 12;

const EXAMPLES: &[&str] = &["help", "hello world", "version", "init my-app"];

pub fn execute_help(out: &mut dyn Write, style: &StyleOptions) -> Result<()> {
    writeln!(out, "{}", banner(style))?;
    writeln!(out, "Usage: {BIN_NAME} <command> [args...]")?;
    writeln!(out)?;
    writeln!(out, "{}", color(Role::Bold, "Available commands:", style))?;
    for cmd in COMMANDS {
        let name = color(Role::Accent, cmd.name, style);
        writeln!(
            out,
            "  {} {}",
            pad_right(&name, NAME_COLUMN_WIDTH),
            cmd.description
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", color(Role::Bold, "Examples:", style))?;
    for example in EXAMPLES {
        writeln!(out, "  {BIN_NAME} {example}")?;
    }
    Ok(())
}
