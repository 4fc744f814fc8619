//! Typed configuration snapshot and the resolution chain

use crate::env::Environment;
use crate::error::{ConfigError, Result};
use crate::keys;
use crate::value::{clean_value, parse_assignment, parse_int, split_words, truthy};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;
use std::io;
use std::path::Path;
use ui9_core::{clamp_i32, parse_hex_rgb, Rgb};

/// Base panel height used when the configured one is 16 or less.
pub const PANEL_HEIGHT_DEFAULT: i32 = 34;
/// Mini bar height used when the configured one is below 16.
pub const MINI_HEIGHT_DEFAULT: i32 = 28;

/// Where the panel sits on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
}

impl Placement {
    pub fn id(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    pub fn all() -> &'static [Placement] {
        &[Placement::Top, Placement::Bottom, Placement::Left]
    }

    /// Exact match on [`id`](Self::id).
    pub fn parse(name: &str) -> Option<Placement> {
        Self::all().iter().copied().find(|p| p.id() == name)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Normal,
    Test,
    Dev,
}

impl SessionMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Test => "test",
            Self::Dev => "dev",
        }
    }

    /// Unknown names read as [`SessionMode::Normal`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "test" => Self::Test,
            "dev" => Self::Dev,
            _ => Self::Normal,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestLayout {
    #[default]
    Laptop,
    Ultrawide,
}

impl TestLayout {
    pub fn id(self) -> &'static str {
        match self {
            Self::Laptop => "laptop",
            Self::Ultrawide => "ultrawide",
        }
    }

    /// Unknown names read as [`TestLayout::Laptop`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ultrawide" => Self::Ultrawide,
            _ => Self::Laptop,
        }
    }
}

/// Panel geometry and module lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PanelConfig {
    /// Module names for the left stack, whitespace separated
    pub left: String,
    /// Module names for the right stack, whitespace separated
    pub right: String,
    /// Base bar height; values of 16 or less fall back to 34
    pub height: i32,
    /// Mini bar height; values below 16 fall back to 28
    pub mini_height: i32,
    pub ascii: bool,
    /// Follow the control service event stream
    pub watch: bool,
    pub pad: i32,
    pub gap: i32,
    /// Draw modules as chips
    pub chip: bool,
    pub ws_max_width: i32,
    pub win_max_width: i32,
    pub placement: Placement,
}

impl PanelConfig {
    pub fn left_modules(&self) -> SmallVec<[&str; 8]> {
        split_words(&self.left)
    }

    pub fn right_modules(&self) -> SmallVec<[&str; 8]> {
        split_words(&self.right)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            left: "menu ws".to_string(),
            right: "preset de net clock notif".to_string(),
            height: PANEL_HEIGHT_DEFAULT,
            mini_height: MINI_HEIGHT_DEFAULT,
            ascii: false,
            watch: true,
            pad: 10,
            gap: 8,
            chip: true,
            ws_max_width: 140,
            win_max_width: 240,
            placement: Placement::Top,
        }
    }
}

/// Theme overrides. `None` means "keep the preset's value".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AppearanceConfig {
    pub style: Option<String>,
    /// Surface alpha, clamped to 0..=255
    pub alpha: Option<i32>,
    #[serde(serialize_with = "ser_rgb")]
    pub accent: Option<Rgb>,
    #[serde(serialize_with = "ser_rgb")]
    pub topbar_bg: Option<Rgb>,
    #[serde(serialize_with = "ser_rgb")]
    pub topbar_text: Option<Rgb>,
    pub border_alpha: Option<i32>,
    pub shadow_alpha: Option<i32>,
    /// Corner radius, clamped to 0..=24
    pub radius: Option<i32>,
    pub font: Option<String>,
}

/// Vertical gradient switches and endpoint overrides.
///
/// An endpoint that fails to parse is `None`, and the drawing code then
/// derives it from the theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GradientConfig {
    pub top: bool,
    #[serde(serialize_with = "ser_rgb")]
    pub top0: Option<Rgb>,
    #[serde(serialize_with = "ser_rgb")]
    pub top1: Option<Rgb>,
    pub mini: bool,
    #[serde(serialize_with = "ser_rgb")]
    pub mini0: Option<Rgb>,
    #[serde(serialize_with = "ser_rgb")]
    pub mini1: Option<Rgb>,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            top: false,
            top0: Some(Rgb::from_hex(0x0c0c0e)),
            top1: Some(Rgb::from_hex(0x1a1a20)),
            mini: false,
            mini0: Some(Rgb::from_hex(0x101014)),
            mini1: Some(Rgb::from_hex(0x18181f)),
        }
    }
}

/// Session startup choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    pub start_shell: bool,
    pub start_demo: bool,
    pub mode: SessionMode,
    pub test_layout: TestLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_shell: true,
            start_demo: false,
            mode: SessionMode::Normal,
            test_layout: TestLayout::Laptop,
        }
    }
}

/// Where a value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    File,
    Environment,
}

/// Fully resolved configuration.
///
/// Rebuilt wholesale on every load: a key dropped from the file reverts to
/// its default, not to the value it had before the reload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConfigSnapshot {
    pub panel: PanelConfig,
    pub appearance: AppearanceConfig,
    pub gradient: GradientConfig,
    pub session: SessionConfig,
}

impl ConfigSnapshot {
    /// Run the full chain: defaults, then `path` (if it exists), then `env`.
    pub fn load(path: &Path, env: &dyn Environment) -> Result<Self> {
        let mut cfg = Self::default();
        cfg.merge_from_file(path)?;
        cfg.merge_from_environment(env);
        tracing::debug!(path = %path.display(), "config resolved");
        Ok(cfg)
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// Merge `path` over the current values.
    ///
    /// A missing file is not an error and returns `Ok(false)`.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<bool> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok(false);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let applied = self.merge_from_str(&String::from_utf8_lossy(&bytes));
        tracing::debug!(path = %path.display(), applied, "config file merged");
        Ok(true)
    }

    /// Merge `key=value` text; returns the number of recognized assignments.
    pub fn merge_from_str(&mut self, text: &str) -> usize {
        text.lines()
            .filter_map(parse_assignment)
            .filter(|(key, value)| self.apply(key, value, Origin::File))
            .count()
    }

    /// Every recognized key present in `env` overrides the current value.
    pub fn merge_from_environment(&mut self, env: &dyn Environment) {
        for key in keys::ALL {
            if let Some(raw) = env.var(key) {
                self.apply(key, clean_value(&raw), Origin::Environment);
            }
        }
    }

    /// Set one key from a normalized value. Returns `false` for unknown keys.
    pub fn apply(&mut self, key: &str, value: &str, origin: Origin) -> bool {
        let p = &mut self.panel;
        let a = &mut self.appearance;
        let g = &mut self.gradient;
        let s = &mut self.session;

        match key {
            keys::PANEL_LEFT => p.left = value.to_string(),
            keys::PANEL_RIGHT => p.right = value.to_string(),
            keys::PANEL_HEIGHT => {
                p.height = parse_int(value);
                if p.height <= 16 {
                    p.height = PANEL_HEIGHT_DEFAULT;
                }
            }
            keys::PANEL_MINIH => {
                p.mini_height = parse_int(value);
                if p.mini_height < 16 {
                    p.mini_height = MINI_HEIGHT_DEFAULT;
                }
            }
            // From the environment, presence alone turns ASCII mode on.
            keys::PANEL_ASCII => p.ascii = origin == Origin::Environment || truthy(value),
            keys::PANEL_WATCH => p.watch = truthy(value),
            keys::PANEL_PAD => p.pad = parse_int(value),
            keys::PANEL_GAP => p.gap = parse_int(value),
            keys::PANEL_CHIP => p.chip = truthy(value),
            keys::PANEL_WS_MAXW => p.ws_max_width = parse_int(value),
            keys::PANEL_WIN_MAXW => p.win_max_width = parse_int(value),
            keys::PANEL_PLACEMENT => p.placement = Placement::parse(value).unwrap_or_default(),

            keys::UI_STYLE => a.style = non_empty(value),
            keys::UI_ALPHA => a.alpha = Some(clamp_i32(parse_int(value), 0, 255)),
            keys::UI_ACCENT => a.accent = parse_hex_rgb(value),
            keys::UI_TOPBG => a.topbar_bg = parse_hex_rgb(value),
            keys::UI_TOPTEXT => a.topbar_text = parse_hex_rgb(value),
            keys::UI_BORDER_ALPHA => a.border_alpha = Some(clamp_i32(parse_int(value), 0, 255)),
            keys::UI_SHADOW_ALPHA => a.shadow_alpha = Some(clamp_i32(parse_int(value), 0, 255)),
            keys::UI_RADIUS => a.radius = Some(clamp_i32(parse_int(value), 0, 24)),
            keys::UI_FONT => a.font = non_empty(value),

            keys::UI_TOPGRAD => g.top = truthy(value),
            keys::UI_TOPGRAD0 => g.top0 = parse_hex_rgb(value),
            keys::UI_TOPGRAD1 => g.top1 = parse_hex_rgb(value),
            keys::UI_MINIGRAD => g.mini = truthy(value),
            keys::UI_MINIGRAD0 => g.mini0 = parse_hex_rgb(value),
            keys::UI_MINIGRAD1 => g.mini1 = parse_hex_rgb(value),

            keys::START_SHELL => s.start_shell = truthy(value),
            keys::START_DEMO => s.start_demo = truthy(value),
            keys::SESSION_MODE => s.mode = SessionMode::from_name(value),
            keys::TEST_LAYOUT => s.test_layout = TestLayout::from_name(value),

            _ => {
                tracing::trace!(key, "unknown config key");
                return false;
            }
        }
        true
    }

    /// Current value of `key` in config-file syntax.
    pub fn get(&self, key: &str) -> Option<String> {
        let p = &self.panel;
        let a = &self.appearance;
        let g = &self.gradient;
        let s = &self.session;

        let int = |v: i32| v.to_string();
        let flag = |v: bool| if v { "1" } else { "0" }.to_string();
        let opt_int = |v: Option<i32>| v.map(|v| v.to_string()).unwrap_or_default();
        let opt_rgb = |v: Option<Rgb>| v.map(|c| c.to_string()).unwrap_or_default();

        let value = match key {
            keys::PANEL_LEFT => p.left.clone(),
            keys::PANEL_RIGHT => p.right.clone(),
            keys::PANEL_HEIGHT => int(p.height),
            keys::PANEL_MINIH => int(p.mini_height),
            keys::PANEL_ASCII => flag(p.ascii),
            keys::PANEL_WATCH => flag(p.watch),
            keys::PANEL_PAD => int(p.pad),
            keys::PANEL_GAP => int(p.gap),
            keys::PANEL_CHIP => flag(p.chip),
            keys::PANEL_WS_MAXW => int(p.ws_max_width),
            keys::PANEL_WIN_MAXW => int(p.win_max_width),
            keys::PANEL_PLACEMENT => p.placement.id().to_string(),

            keys::UI_STYLE => a.style.clone().unwrap_or_default(),
            keys::UI_ALPHA => opt_int(a.alpha),
            keys::UI_ACCENT => opt_rgb(a.accent),
            keys::UI_TOPBG => opt_rgb(a.topbar_bg),
            keys::UI_TOPTEXT => opt_rgb(a.topbar_text),
            keys::UI_BORDER_ALPHA => opt_int(a.border_alpha),
            keys::UI_SHADOW_ALPHA => opt_int(a.shadow_alpha),
            keys::UI_RADIUS => opt_int(a.radius),
            keys::UI_FONT => a.font.clone().unwrap_or_default(),

            keys::UI_TOPGRAD => flag(g.top),
            keys::UI_TOPGRAD0 => opt_rgb(g.top0),
            keys::UI_TOPGRAD1 => opt_rgb(g.top1),
            keys::UI_MINIGRAD => flag(g.mini),
            keys::UI_MINIGRAD0 => opt_rgb(g.mini0),
            keys::UI_MINIGRAD1 => opt_rgb(g.mini1),

            keys::START_SHELL => flag(s.start_shell),
            keys::START_DEMO => flag(s.start_demo),
            keys::SESSION_MODE => s.mode.id().to_string(),
            keys::TEST_LAYOUT => s.test_layout.id().to_string(),

            _ => return None,
        };
        Some(value)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn ser_rgb<S: Serializer>(value: &Option<Rgb>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(rgb) => serializer.collect_str(rgb),
        None => serializer.serialize_none(),
    }
}
