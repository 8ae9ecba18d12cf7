//! Command handlers, one module per subcommand.

pub mod add;
pub mod breakdown;
pub mod delete;
pub mod init;
pub mod list;
pub mod misc;
pub mod total;
