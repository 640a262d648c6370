//! One file per subcommand; each handler validates its own input and maps failures to an exit code.

mod entry;
mod log;
mod preset;

pub use entry::cmd_entry;
pub use log::cmd_log;
pub use preset::{cmd_preset, cmd_presets};
