use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use cbo_explorer::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "cbo-explorer", about = "Serves the CBO Explorer web UI")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "explorer.toml")]
    config: PathBuf,
    /// Override the listen host
    #[arg(long)]
    host: Option<String>,
    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,
    /// Override the UI bundle directory
    #[arg(long)]
    dist_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut settings = Settings::from_file(&cli.config)?;
    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(dist_dir) = cli.dist_dir {
        settings.ui.dist_dir = dist_dir;
    }

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!(
        "Serving CBO Explorer UI from {} on {}",
        settings.ui.dist_dir, addr
    );

    let app = cbo_explorer::create_app(&settings.ui.dist_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
