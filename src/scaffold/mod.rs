//! Project scaffolding used by `init`.
//!
//! ScaffoldRequest::new -> init_project -> create_directories + create_project_files
//!
//! Directory creation is recursive and idempotent. File writes overwrite;
//! a failure partway leaves whatever was already written in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::{log_debug, log_trace};

pub mod templates;

pub use templates::{TEMPLATES, TemplateFile};

pub const DEFAULT_PROJECT_NAME: &str = "my-vitron-project";

/// Subdirectories created under the project root (in this order).
pub const PROJECT_DIRS: [&str; 4] = ["src", "tests", "docs", "config"];

/// Target directory + name for a single `init` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub target: PathBuf,
    pub project_name: String,
}

impl ScaffoldRequest {
    /// `base` joined with the project name; a missing or empty name falls
    /// back to `DEFAULT_PROJECT_NAME`.
    pub fn new(base: &Path, name: Option<&str>) -> Self {
        let project_name = name
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_PROJECT_NAME)
            .to_string();
        Self {
            target: base.join(&project_name),
            project_name,
        }
    }

    /// Same as `new`, rooted at the process working directory.
    pub fn in_current_dir(name: Option<&str>) -> Result<Self, ScaffoldError> {
        let cwd = std::env::current_dir().map_err(ScaffoldError::CurrentDir)?;
        Ok(Self::new(&cwd, name))
    }
}

/// Create the directory skeleton then write every template.
/// Returns the written file paths in template order.
pub fn init_project(req: &ScaffoldRequest) -> Result<Vec<PathBuf>, ScaffoldError> {
    create_directories(&req.target)?;
    create_project_files(&req.target, &req.project_name)
}

pub fn create_directories(target: &Path) -> Result<(), ScaffoldError> {
    let dirs = std::iter::once(target.to_path_buf()).chain(PROJECT_DIRS.iter().map(|d| target.join(d)));
    for dir in dirs {
        fs::create_dir_all(&dir).map_err(|source| ScaffoldError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        log_debug!("created directory {}", dir.display());
    }
    Ok(())
}

pub fn create_project_files(target: &Path, project_name: &str) -> Result<Vec<PathBuf>, ScaffoldError> {
    let mut written = Vec::with_capacity(TEMPLATES.len());
    for template in TEMPLATES {
        let path = target.join(template.path);
        let content = template.render(project_name)?;
        fs::write(&path, &content).map_err(|source| ScaffoldError::WriteFile {
            path: path.clone(),
            source,
        })?;
        log_trace!("wrote {} ({} bytes)", path.display(), content.len());
        written.push(path);
    }
    log_debug!("wrote {} files under {}", written.len(), target.display());
    Ok(written)
}
