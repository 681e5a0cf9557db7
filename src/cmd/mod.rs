/*!
Command layer.

Layout:
  src/cmd/
    mod.rs        (this file: module declarations + re-exports)
    registry.rs   (Command descriptors, CommandKind, find_command)
    dispatch.rs   (dispatch / run: argv -> handler -> exit code)
    format.rs     (banner, colors, emoji, padding)
    help.rs       (execute_help)
    version.rs    (execute_version)
    hello.rs      (execute_hello)
    init.rs       (execute_init, backed by crate::scaffold)

Conventions:
  - Each command module exposes one public `execute_*` function returning
    `anyhow::Result<()>` and writing to the `&mut dyn Write` it is given.
  - Handlers never exit the process; `dispatch::run` maps failures to codes.
*/

pub mod dispatch;
pub mod format;
pub mod hello;
pub mod help;
pub mod init;
pub mod registry;
pub mod version;

pub use dispatch::{dispatch, run};
pub use format::StyleOptions;
pub use registry::{COMMANDS, Command, CommandKind, command_names, find_command};

/// Name shown in usage lines and hints.
pub const BIN_NAME: &str = "vitron";
