mod cli;
mod commands;
mod context;
mod presenter;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use libdrift_core::DriftError;

use cli::{Cli, Command};
use context::DriftContext;

fn main() {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let ctx = match DriftContext::resolve() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {}", e);
            if matches!(e, DriftError::Config(_)) {
                eprintln!("Please check your .env file.");
            }
            std::process::exit(e.exit_code());
        }
    };

    let result = match cli.command {
        Command::DailyBriefing => commands::briefing::run(&ctx),
        Command::AddLog { project, text } => commands::log::run(&ctx, project, text),
        Command::CheckStale => commands::stale::run(&ctx),
        Command::ViewProject { project } => commands::view::run(&ctx, project),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
