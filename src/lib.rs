//! Vitron: a small command dispatcher (`help`, `version`, `hello`, `init`)
//! with a project scaffolder behind `init`.
//!
//! The binary in `main.rs` only parses global flags, sets up logging and
//! styling, and hands the remaining arguments to [`cmd::run`].

pub mod cmd;
pub mod error;
pub mod scaffold;
pub mod utils;

pub use error::{CliError, ScaffoldError};
