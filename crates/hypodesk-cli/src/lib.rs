mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
mod tui;

pub use args::{
    Cli, Commands, ConfigCommand, HypothesisCommand, LogLevel, OutputFormat, TopicsCommand,
};
pub use commands::run;
