use anyhow::Context;
use clap::Parser;
use echonet_rs::exporter::{router, AppState, EchonetSource};
use echonet_rs::{init_logger, log_info};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "echonet-exporter")]
#[command(about = "Plain-text metrics exporter for ECHONET-Lite home-energy devices")]
struct Cli {
    /// Address the HTTP listener binds to
    #[arg(short, long, default_value = "0.0.0.0:8000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let state = AppState::new(EchonetSource);

    let listener = TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("failed to bind {}", cli.listen))?;
    log_info(&format!("listening on http://{}", cli.listen));

    axum::serve(listener, router(state))
        .await
        .context("http server failed")?;

    Ok(())
}
