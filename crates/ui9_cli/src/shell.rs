//! Session host: control service plus the surfaces it starts

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use ui9_config::{home_dir, Environment};
use ui9_ctl::hub::lock;
use ui9_ctl::Server;

/// `$home/lib/9de/log` and `$home/lib/9de/run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionDirs {
    pub log: PathBuf,
    pub run: PathBuf,
}

impl SessionDirs {
    pub fn new(env: &dyn Environment) -> Self {
        let base = home_dir(env).join("lib/9de");
        Self {
            log: base.join("log"),
            run: base.join("run"),
        }
    }

    pub fn create(&self) -> Result<()> {
        for dir in [&self.log, &self.run] {
            fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Ok(())
    }

    /// `<name>.log` and `<name>.err` under the log directory.
    pub fn logs_for(&self, name: &str) -> (PathBuf, PathBuf) {
        (
            self.log.join(format!("{name}.log")),
            self.log.join(format!("{name}.err")),
        )
    }
}

/// `name` next to the running executable if it is there, else bare `name`
/// for a `$PATH` lookup.
pub fn sibling(name: &str) -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|d| d.join(name)))
        .filter(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from(name))
}

/// Start `program` with stdout and stderr split into the session logs.
pub fn spawn_logged(dirs: &SessionDirs, name: &str, program: &Path) -> Result<Child> {
    let (out, err) = dirs.logs_for(name);
    let child = Command::new(program)
        .stdout(File::create(&out).with_context(|| format!("Failed to open {}", out.display()))?)
        .stderr(File::create(&err).with_context(|| format!("Failed to open {}", err.display()))?)
        .spawn()
        .with_context(|| format!("Failed to start {}", program.display()))?;
    tracing::info!(name, pid = child.id(), "started");
    Ok(child)
}

/// Announce the shell on the event queue, then serve until accept fails.
pub async fn serve(server: Server) -> ui9_ctl::Result<()> {
    lock(&server.hub()).post("shell boot");
    server.run().await
}
