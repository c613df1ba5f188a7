use anyhow::Result;

use crate::config::Config;

use super::args::{Cli, Command};
use super::config_cmd;
use super::history;
use super::run;

pub(crate) async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Command::Run(args) => run::handle_run(args, &config).await,
        Command::History(args) => history::handle_history(args, &config),
        Command::Config(args) => config_cmd::handle_config(args, &config),
    }
}
