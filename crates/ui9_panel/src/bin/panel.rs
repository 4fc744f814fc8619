//! 9de-panel: the top bar.
//!
//! Runs on the headless backend for `--frames` frames and prints the strings
//! of the last one. With `panel_watch` set the panel follows the control
//! service's event stream.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::Command;
use tracing_subscriber::EnvFilter;
use ui9_app::{AppContext, EventWatcher, Runtime};
use ui9_config::{config_path, home_dir, ProcessEnv};
use ui9_ctl::{socket_path, Client};
use ui9_panel::{Launch, Panel, WsysWindows};
use ui9_platform::HeadlessBackend;

#[derive(Parser, Debug)]
#[command(name = "9de-panel")]
#[command(about = "9DE top panel")]
#[command(version)]
struct Args {
    /// Config file (default: $home/lib/9de/config.rc)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window directory to list in the mini bar
    #[arg(long, default_value = WsysWindows::DEFAULT_ROOT)]
    wsys: PathBuf,

    #[arg(long, default_value_t = 1280)]
    width: i32,

    /// Surface height; the mini bar needs panel_height + panel_minih
    #[arg(long, default_value_t = 62)]
    height: i32,

    /// Frames to draw before exiting
    #[arg(long, default_value_t = 1)]
    frames: u64,
}

fn log_dir() -> PathBuf {
    home_dir(&ProcessEnv).join("lib/9de/log")
}

fn spawn_dash() -> Result<()> {
    let dir = log_dir();
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    // Prefer the binary installed next to this one.
    let exe = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.join("9de-dash")))
        .filter(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from("9de-dash"));
    let out = File::create(dir.join("9de-dash.log"))?;
    let err = File::create(dir.join("9de-dash.err"))?;
    Command::new(&exe)
        .stdout(out)
        .stderr(err)
        .spawn()
        .with_context(|| format!("Failed to start {}", exe.display()))?;
    Ok(())
}

fn show_logs(errors: bool) -> Result<()> {
    let dir = log_dir();
    let entries = fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))?;
    if errors {
        println!("--- 9de errors ---");
    }
    for entry in entries {
        let path = entry?.path();
        let is_err = path.extension().is_some_and(|e| e == "err");
        println!("{}", path.display());
        if errors && is_err {
            print!("{}", fs::read_to_string(&path).unwrap_or_default());
        }
    }
    Ok(())
}

fn launch(what: Launch) {
    let result = match what {
        Launch::Dashboard => spawn_dash(),
        Launch::Logs => show_logs(false),
        Launch::Errors => show_logs(true),
    };
    if let Err(e) = result {
        tracing::warn!(?what, "launch failed: {e:#}");
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
    let watch = cx.config.panel.watch;

    let socket = socket_path(&ProcessEnv);
    let panel = Panel::new(WsysWindows::new(args.wsys))
        .with_socket(&socket)
        .with_launcher(launch);
    let backend = HeadlessBackend::new(args.width, args.height)
        .context("Failed to create headless surface")?;

    let mut rt = Runtime::new(panel, cx, backend);
    if watch {
        let watcher = EventWatcher::spawn(Client::new(&socket))
            .context("Failed to start event watcher")?;
        rt = rt.with_watcher(watcher);
    }

    while rt.frames() < args.frames && !rt.context().should_quit() {
        rt.backend_mut().recording_mut().clear();
        rt.step().context("Panel loop failed")?;
    }

    let mut texts: Vec<&str> = rt.backend().recording().texts().collect();
    // Every string is drawn twice, over its shadow.
    texts.dedup();
    println!("{}", texts.join("  "));
    Ok(())
}
