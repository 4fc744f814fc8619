//! Window list capability
//!
//! The panel never talks to a window system directly. It polls a
//! [`WindowSource`] for the current list and asks it to focus entries the
//! user clicks in the mini bar.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use ui9_core::Rect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowEntry {
    pub id: i32,
    /// Whether this is the window with input focus.
    pub current: bool,
    pub label: String,
}

impl WindowEntry {
    pub fn new(id: i32, label: impl Into<String>) -> Self {
        Self {
            id,
            current: false,
            label: label.into(),
        }
    }

    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }
}

pub trait WindowSource {
    /// Current window list, in display order.
    fn windows(&mut self) -> Vec<WindowEntry>;

    /// Make `id` the current window. Best effort.
    fn focus(&mut self, id: i32);

    /// Where entry `id` (or the whole list) lives, for the mini bar hint.
    /// Empty means no hint.
    fn location(&self, _id: Option<i32>) -> String {
        String::new()
    }
}

/// Fixed list. Focus requests move the current flag and are remembered.
#[derive(Clone, Debug, Default)]
pub struct StaticWindows {
    entries: Vec<WindowEntry>,
    focused: Vec<i32>,
}

impl StaticWindows {
    pub fn new(entries: Vec<WindowEntry>) -> Self {
        Self {
            entries,
            focused: Vec::new(),
        }
    }

    pub fn focus_requests(&self) -> &[i32] {
        &self.focused
    }
}

impl WindowSource for StaticWindows {
    fn windows(&mut self) -> Vec<WindowEntry> {
        self.entries.clone()
    }

    fn focus(&mut self, id: i32) {
        self.focused.push(id);
        for w in &mut self.entries {
            w.current = w.id == id;
        }
    }
}

/// A rio-style window directory: one numbered subdirectory per window,
/// each holding a `wctl` status line and a `label`.
#[derive(Clone, Debug)]
pub struct WsysWindows {
    root: PathBuf,
}

impl WsysWindows {
    pub const DEFAULT_ROOT: &'static str = "/dev/wsys";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_entry(&self, id: i32) -> Option<WindowEntry> {
        let dir = self.root.join(id.to_string());
        let wctl = fs::read_to_string(dir.join("wctl")).ok()?;
        let (_, current) = parse_wctl(&wctl)?;
        let label = fs::read_to_string(dir.join("label"))
            .map(|l| l.trim_end_matches(['\r', '\n']).to_string())
            .unwrap_or_else(|_| "window".to_string());
        Some(WindowEntry { id, current, label })
    }

    fn list(&self) -> io::Result<Vec<WindowEntry>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(id) = entry.file_name().to_str().and_then(|n| n.parse::<i32>().ok()) else {
                continue;
            };
            if id <= 0 {
                continue;
            }
            if let Some(w) = self.read_entry(id) {
                out.push(w);
            }
        }
        out.sort_by_key(|w| w.id);
        Ok(out)
    }
}

impl Default for WsysWindows {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}

impl WindowSource for WsysWindows {
    fn windows(&mut self) -> Vec<WindowEntry> {
        self.list().unwrap_or_else(|e| {
            tracing::trace!(root = %self.root.display(), "window list unavailable: {e}");
            Vec::new()
        })
    }

    fn focus(&mut self, id: i32) {
        let path = self.root.join(id.to_string()).join("wctl");
        if let Err(e) = fs::write(&path, "current") {
            tracing::debug!(path = %path.display(), "focus failed: {e}");
        }
    }

    fn location(&self, id: Option<i32>) -> String {
        match id {
            Some(id) => format!("path: {}/{id}", self.root.display()),
            None => format!("path: {}", self.root.display()),
        }
    }
}

/// Parse a `wctl` line: `minx miny maxx maxy <hidden|visible> <current|notcurrent>`.
///
/// Fewer than six fields is `None`. Coordinates read like `atoi`.
pub fn parse_wctl(s: &str) -> Option<(Rect, bool)> {
    let f: Vec<&str> = s.split_whitespace().collect();
    if f.len() < 6 {
        return None;
    }
    let n = |i: usize| ui9_config::parse_int(f[i]);
    Some((Rect::new(n(0), n(1), n(2), n(3)), f[5] == "current"))
}
