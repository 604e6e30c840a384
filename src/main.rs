use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatrelay::connector::api::{Container, ContainerConfig, Router};
use chatrelay::{Commands, DEFAULT_MEMORY_WINDOW};

#[derive(Parser)]
#[command(name = "chatrelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer with an offline echo model instead of the completion API
    #[arg(long, global = true)]
    mock_completion: bool,

    /// Number of most recent messages forwarded to the model
    #[arg(long, global = true, default_value_t = DEFAULT_MEMORY_WINDOW)]
    memory_window: usize,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let container = Container::new(ContainerConfig {
        mock_completion: cli.mock_completion,
        memory_window: cli.memory_window,
    })?;

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
