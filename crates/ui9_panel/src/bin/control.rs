//! 9de-control: the settings form.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ui9_app::{AppContext, Runtime};
use ui9_config::{config_path, ProcessEnv};
use ui9_ctl::{socket_path, Client};
use ui9_panel::Settings;
use ui9_platform::HeadlessBackend;

#[derive(Parser, Debug)]
#[command(name = "9de-control")]
#[command(about = "9DE settings")]
#[command(version)]
struct Args {
    /// Config file (default: $home/lib/9de/config.rc)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Control socket the reload request goes to
    #[arg(long)]
    socket: Option<PathBuf>,

    /// Write the form as loaded and post a reload
    #[arg(long)]
    apply: bool,

    #[arg(long, default_value_t = 900)]
    width: i32,

    #[arg(long, default_value_t = 720)]
    height: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let path = args.config.unwrap_or_else(|| config_path(&ProcessEnv));
    let cx = AppContext::load(&path, Box::new(ProcessEnv))
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let client = Client::new(args.socket.unwrap_or_else(|| socket_path(&ProcessEnv)));
    let settings = Settings::new().with_reloader(move || match client.ctl("reload") {
        Ok(reply) => Some(reply),
        Err(e) => {
            tracing::debug!(socket = %client.path().display(), "reload not sent: {e}");
            None
        }
    });

    let backend = HeadlessBackend::new(args.width, args.height)
        .context("Failed to create headless surface")?;
    let mut rt = Runtime::new(settings, cx, backend);
    rt.step().context("Settings loop failed")?;

    if args.apply {
        let (app, cx) = rt.parts_mut();
        app.apply(cx);
        rt.step().context("Settings loop failed")?;
        println!("{}", rt.app().status());
    } else {
        let mut texts: Vec<&str> = rt.backend().recording().texts().collect();
        texts.dedup();
        for text in texts {
            println!("{text}");
        }
    }
    Ok(())
}
