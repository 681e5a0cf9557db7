/*!
`hello [name]` command.
*/

use std::io::Write;

use anyhow::Result;

use crate::cmd::format::{StyleOptions, emoji_prefix};

pub const DEFAULT_NAME: &str = "World";

/// First argument, or `World` when missing or empty. Used verbatim otherwise.
pub fn greeted_name(args: &[String]) -> &str {
    args.first()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_NAME)
}

pub fn execute_hello(args: &[String], out: &mut dyn Write, style: &StyleOptions) -> Result<()> {
    writeln!(
        out,
        "{}Hello, {}!",
        emoji_prefix("wave", style),
        greeted_name(args)
    )?;
    Ok(())
}
