mod args;
mod commands;
mod config_cmd;
mod history;
mod run;

pub use args::Cli;
