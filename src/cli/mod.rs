pub mod commands;
pub mod demo;

pub use commands::{Cli, Commands, ConfigAction};
pub use demo::run_demo;
