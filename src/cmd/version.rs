/*!
`version` command.
*/

use std::io::Write;

use anyhow::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_string() -> String {
    format!("Vitron CLI v{VERSION}")
}

pub fn execute_version(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", version_string())?;
    Ok(())
}
