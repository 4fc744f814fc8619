//! Panel modules
//!
//! The set of things the top bar can show is closed: each `panel_left` /
//! `panel_right` word names one [`PanelModule`], and words that name none
//! are dropped when the stacks are built.

use std::fmt;
use ui9_paint::Canvas;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelModule {
    /// `≡ 9DE`, opens the dashboard.
    Menu,
    /// Label of the current window.
    Workspace,
    /// Control service indicator.
    Desktop,
    Net,
    Clock,
    /// Active style preset.
    Preset,
    /// Error counter, opens the error logs.
    Notify,
}

impl PanelModule {
    pub fn id(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Workspace => "ws",
            Self::Desktop => "de",
            Self::Net => "net",
            Self::Clock => "clock",
            Self::Preset => "preset",
            Self::Notify => "notif",
        }
    }

    pub fn all() -> &'static [PanelModule] {
        &[
            Self::Menu,
            Self::Workspace,
            Self::Desktop,
            Self::Net,
            Self::Clock,
            Self::Preset,
            Self::Notify,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.id() == name)
    }

    /// Whether the module draws a chip and reacts to the pointer.
    pub fn interactive(self) -> bool {
        matches!(self, Self::Menu | Self::Workspace | Self::Notify)
    }
}

impl fmt::Display for PanelModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Resolve a module word list, skipping unknown names.
pub fn parse_modules<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<PanelModule> {
    words
        .into_iter()
        .filter_map(|w| {
            let module = PanelModule::from_name(w);
            if module.is_none() {
                tracing::debug!(name = w, "unknown panel module skipped");
            }
            module
        })
        .collect()
}

/// Pick the glyph or its ASCII stand-in.
pub fn sym(ascii: bool, glyph: &'static str, plain: &'static str) -> &'static str {
    if ascii {
        plain
    } else {
        glyph
    }
}

/// Fit `s` into `max_px`, cutting characters from the end and appending an
/// ellipsis until it fits. Returns the bare ellipsis when nothing does.
pub fn ellipsize(canvas: &dyn Canvas, s: &str, max_px: i32, ascii: bool) -> String {
    if canvas.string_width(s) <= max_px {
        return s.to_string();
    }

    let dots = sym(ascii, "…", "...");
    let ends: Vec<usize> = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .collect();
    for &end in ends.iter().rev() {
        let candidate = format!("{}{dots}", &s[..end]);
        if canvas.string_width(&candidate) <= max_px {
            return candidate;
        }
    }
    dots.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui9_paint::RecordingCanvas;

    #[test]
    fn test_names_round_trip() {
        for m in PanelModule::all() {
            assert_eq!(PanelModule::from_name(m.id()), Some(*m));
        }
        assert_eq!(PanelModule::from_name("battery"), None);
    }

    #[test]
    fn test_unknown_words_are_skipped() {
        let mods = parse_modules(["menu", "bogus", "ws", "clock"]);
        assert_eq!(
            mods,
            vec![PanelModule::Menu, PanelModule::Workspace, PanelModule::Clock]
        );
    }

    #[test]
    fn test_ellipsize() {
        // 7px per glyph
        let canvas = RecordingCanvas::new(100, 20);
        assert_eq!(ellipsize(&canvas, "short", 35, false), "short");
        assert_eq!(ellipsize(&canvas, "terminal", 35, false), "term…");
        assert_eq!(ellipsize(&canvas, "terminal", 35, true), "te...");
        assert_eq!(ellipsize(&canvas, "terminal", 3, true), "...");
    }

    #[test]
    fn test_ellipsize_respects_char_boundaries() {
        let canvas = RecordingCanvas::new(100, 20);
        assert_eq!(ellipsize(&canvas, "ééééé", 21, false), "éé…");
    }
}
