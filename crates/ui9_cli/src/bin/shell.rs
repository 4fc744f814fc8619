//! 9de-shell: hosts the control service and starts the session surfaces.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ui9_cli::shell::{serve, sibling, spawn_logged, SessionDirs};
use ui9_config::{config_path, ConfigSnapshot, ProcessEnv, SessionMode};
use ui9_ctl::{socket_path, Server};

#[derive(Parser, Debug)]
#[command(name = "9de-shell")]
#[command(about = "9DE session host")]
#[command(version)]
struct Args {
    /// Control socket (default: $XDG_RUNTIME_DIR/9de.sock, else /tmp/9de.sock)
    #[arg(long)]
    socket: Option<PathBuf>,

    /// Config file (default: $home/lib/9de/config.rc)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also start the demo harness
    #[arg(short, long)]
    dev: bool,

    /// Serve control requests only
    #[arg(long)]
    no_panel: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let path = args.config.unwrap_or_else(|| config_path(&ProcessEnv));
    let cfg = ConfigSnapshot::load(&path, &ProcessEnv)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let socket = args.socket.unwrap_or_else(|| socket_path(&ProcessEnv));
    let server = Server::bind(&socket)
        .with_context(|| format!("Failed to bind {}", socket.display()))?;
    tracing::info!(socket = %socket.display(), "control service up");

    let dirs = SessionDirs::new(&ProcessEnv);
    dirs.create()?;

    if !args.no_panel {
        spawn_logged(&dirs, "9de-panel", &sibling("9de-panel"))?;
    }
    let demo = args.dev || cfg.session.start_demo || cfg.session.mode == SessionMode::Dev;
    if demo {
        if let Err(e) = spawn_logged(&dirs, "ui9_demo", &sibling("ui9_demo")) {
            tracing::warn!("demo not started: {e:#}");
        }
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;
    rt.block_on(serve(server)).context("Control service stopped")?;
    Ok(())
}
