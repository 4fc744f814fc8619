//! 9de-dash: the dashboard surface.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ui9_app::{AppContext, Runtime};
use ui9_config::{config_path, home_dir, ProcessEnv};
use ui9_panel::Dashboard;
use ui9_platform::HeadlessBackend;

#[derive(Parser, Debug)]
#[command(name = "9de-dash")]
#[command(about = "9DE dashboard")]
#[command(version)]
struct Args {
    /// Config file (default: $home/lib/9de/config.rc)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 1280)]
    width: i32,

    #[arg(long, default_value_t = 800)]
    height: i32,
}

/// `$home/lib/9de/run/9de-dash.pid` for as long as the dashboard runs.
struct PidFile(PathBuf);

impl PidFile {
    fn create() -> Result<Self> {
        let dir = home_dir(&ProcessEnv).join("lib/9de/run");
        fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join("9de-dash.pid");
        fs::write(&path, format!("{}\n", std::process::id()))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(Self(path))
    }
}

impl Drop for PidFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
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

    let pid = PidFile::create();
    if let Err(e) = &pid {
        tracing::warn!("no pid file: {e:#}");
    }

    let backend = HeadlessBackend::new(args.width, args.height)
        .context("Failed to create headless surface")?;
    let mut rt = Runtime::new(Dashboard::new(), cx, backend);
    rt.step().context("Dashboard loop failed")?;

    let mut texts: Vec<&str> = rt.backend().recording().texts().collect();
    texts.dedup();
    for text in texts {
        println!("{text}");
    }
    Ok(())
}
