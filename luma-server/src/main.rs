use anyhow::Context;
use clap::Parser;
use luma_server::{app, demo, state::AppState};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "luma-server")]
#[command(about = "Media library server exposing hydrated item DTOs")]
struct Cli {
    /// Server host
    #[arg(long, env = "LUMA_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short, long, env = "LUMA_PORT", default_value_t = 8096)]
    port: u16,

    /// Seed a synthetic in-memory library and demo user
    #[arg(long, env = "LUMA_DEMO_MODE", default_value_t = false)]
    demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = if cli.demo {
        let seed = demo::seed().await;
        info!(
            root = %seed.root_id,
            movie = %seed.movie_id,
            series = %seed.series_id,
            user = %seed.user_id,
            "demo mode: library seeded"
        );
        seed.state
    } else {
        warn!("no backend configured, serving an empty library (try --demo)");
        AppState::empty()
    };

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("invalid host/port")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, app(state))
        .await
        .context("server exited")?;

    Ok(())
}
