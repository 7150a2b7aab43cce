use anyhow::Result;
use tracing::info;

use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, resolve_data_dir};
use crate::logging;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_from(&Config::default_path(&data_dir))?;

    let level = cli.log_level.unwrap_or(config.log_level);
    let log_dir = logging::init(&data_dir, level)?;
    info!(
        data_dir = %data_dir.display(),
        log_dir = %log_dir.display(),
        storage_key = %config.storage_key,
        "aurora starting"
    );

    let ctx = HandlerContext::new(data_dir, config);

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => handlers::ui::handle(&ctx, cli.route),
        Commands::List { format } => handlers::list::handle(&ctx, format),
        Commands::Reset => handlers::reset::handle(&ctx),
    }
}
