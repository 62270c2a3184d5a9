use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use studiofolio::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    if let cli::Commands::Version = args.command {
        println!("studiofolio v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration before logging so the configured level applies
    let cfg = config::load_config(args.config.as_deref())?;
    init_tracing(&cfg.logging);
    studiofolio::metrics::init_metric_descriptions();

    match &args.command {
        cli::Commands::Quote(quote) => commands::quote::execute(quote, &cfg)?,
        cli::Commands::Gallery { action } => commands::gallery::execute(action, &cfg).await?,
        cli::Commands::Inquire(inquire) => commands::inquire::execute(inquire, &cfg).await?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg)?,
        },
        cli::Commands::Version => {}
    }

    Ok(())
}
