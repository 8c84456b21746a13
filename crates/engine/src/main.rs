//! Tavernkeep Engine - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tavernkeep_engine::cli::{self, CliError, Command};
use tavernkeep_engine::config::{load_dotenv_from_repo_root, EngineConfig};
use tavernkeep_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging. Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tavernkeep_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(CliError::Usage(message)) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    let config = EngineConfig::from_env()?;
    tracing::info!(
        default_system = %config.default_system,
        roll_history_limit = config.roll_history_limit,
        "Starting Tavernkeep Engine"
    );

    let app = App::from_config(config);
    let output = cli::run(&app, &command).await?;
    println!("{output}");

    Ok(())
}
