/*!
`init [projectName]` command.

Scaffolds `<cwd>/<projectName>/` (default name `my-vitron-project`) and
prints the written files plus next steps. Filesystem errors propagate to
the dispatcher unchanged.
*/

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::cmd::format::{Role, StyleOptions, color, emoji_prefix};
use crate::scaffold::{self, ScaffoldRequest};

pub fn execute_init(args: &[String], out: &mut dyn Write, style: &StyleOptions) -> Result<()> {
    let req = ScaffoldRequest::in_current_dir(args.first().map(String::as_str))?;
    run_init(&req, out, style)
}

/// Scaffold `req` and report to `out`.
pub fn run_init(req: &ScaffoldRequest, out: &mut dyn Write, style: &StyleOptions) -> Result<()> {
    writeln!(
        out,
        "{}Creating project '{}' in {}",
        emoji_prefix("folder", style),
        req.project_name,
        req.target.display()
    )?;

    let written = scaffold::init_project(req)?;

    for path in &written {
        writeln!(
            out,
            "  {}{}",
            emoji_prefix("file", style),
            color(Role::Dim, relative(path, &req.target).display().to_string(), style)
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{}{}",
        emoji_prefix("spark", style),
        color(
            Role::Success,
            format!("Project '{}' created successfully!", req.project_name),
            style
        )
    )?;
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "  cd {}", req.project_name)?;
    writeln!(out, "  bun install")?;
    writeln!(out, "  bun run dev")?;
    Ok(())
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
