//! Application context
//!
//! Everything a surface shares between its timers, input handlers and draw
//! pass: theme, resolved config and the loop flags.

use crate::watcher::ControlEvent;
use std::path::{Path, PathBuf};
use ui9_config::{ConfigError, ConfigSnapshot, Environment};
use ui9_theme::{Style, ThemeEngine};

pub struct AppContext {
    pub theme: ThemeEngine,
    pub config: ConfigSnapshot,
    config_path: PathBuf,
    env: Box<dyn Environment>,
    dirty: bool,
    reload_pending: bool,
    quit: bool,
    reloads: u64,
    status: Option<String>,
}

impl AppContext {
    /// Context with compiled-in defaults; nothing is read yet.
    pub fn new(config_path: impl Into<PathBuf>, env: Box<dyn Environment>) -> Self {
        Self {
            theme: ThemeEngine::new(Style::default()),
            config: ConfigSnapshot::default(),
            config_path: config_path.into(),
            env,
            dirty: true,
            reload_pending: false,
            quit: false,
            reloads: 0,
            status: None,
        }
    }

    /// Context with the config chain already resolved.
    ///
    /// An unreadable config file is fatal here; later reloads only degrade.
    pub fn load(
        config_path: impl Into<PathBuf>,
        env: Box<dyn Environment>,
    ) -> Result<Self, ConfigError> {
        let mut cx = Self::new(config_path, env);
        cx.reload()?;
        Ok(cx)
    }

    /// Re-run defaults, file and environment, then re-derive the theme.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        self.config = ConfigSnapshot::load(&self.config_path, &*self.env)?;
        self.theme.apply_appearance(&self.config.appearance, &*self.env);
        self.reloads += 1;
        self.dirty = true;
        tracing::debug!(reloads = self.reloads, "config reloaded");
        Ok(())
    }

    /// Run a pending reload, if any. A failed reload keeps the last good
    /// state and leaves a status message. Returns whether one ran.
    pub fn apply_pending_reload(&mut self) -> bool {
        if !std::mem::take(&mut self.reload_pending) {
            return false;
        }
        match self.reload() {
            Ok(()) => self.status = None,
            Err(e) => {
                tracing::warn!("reload failed: {e}");
                self.status = Some(format!("reload failed: {e}"));
                self.dirty = true;
            }
        }
        true
    }

    /// Reactions every surface shares; surface-specific ones live in
    /// [`App::control`](crate::App::control).
    pub fn observe(&mut self, event: &ControlEvent) {
        if event.requests_reload() {
            self.reload_pending = true;
        }
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn request_reload(&mut self) {
        self.reload_pending = true;
    }

    pub fn reload_pending(&self) -> bool {
        self.reload_pending
    }

    /// Completed reloads, including the initial load.
    pub fn reloads(&self) -> u64 {
        self.reloads
    }

    /// Ask the loop to stop after the current iteration.
    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Last user-visible failure, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
        self.dirty = true;
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn env(&self) -> &dyn Environment {
        &*self.env
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config_path", &self.config_path)
            .field("style", &self.theme.theme().style())
            .field("dirty", &self.dirty)
            .field("reload_pending", &self.reload_pending)
            .field("reloads", &self.reloads)
            .finish_non_exhaustive()
    }
}
