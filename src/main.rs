mod cli;
mod kubernetes;
mod projection;
mod refresh;
mod types;
mod ui;
mod utils;

use clap::Parser;

use cli::Cli;
use kubernetes::KubeSession;
use types::{RefreshConfig, ResourceKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only ever carries tables
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let kind = match cli.resource.parse::<ResourceKind>() {
        Ok(kind) => kind,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };
    let config = RefreshConfig::from_cli(&cli, kind);

    let session = KubeSession::connect(cli.kubeconfig.as_deref(), cli.context.as_deref()).await?;

    let mut stdout = std::io::stdout().lock();
    refresh::run(&session, &config, &mut stdout).await?;
    Ok(())
}
