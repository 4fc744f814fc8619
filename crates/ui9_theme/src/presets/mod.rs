//! Built-in style presets.

use crate::theme::{BaseColors, Theme};
use std::fmt::{Display, Formatter};
use ui9_core::Rgb;

/// Closed set of visual styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Light, flat, fully opaque.
    #[default]
    Terminal,
    /// Dark neutral greys with a soft shadow.
    Dark,
    /// Translucent surfaces over a dark backdrop.
    Glass,
}

impl Style {
    /// Stable id used in config files and control commands.
    pub fn id(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Dark => "dark",
            Self::Glass => "glass",
        }
    }

    pub fn all() -> &'static [Style] {
        const STYLES: [Style; 3] = [Style::Terminal, Style::Dark, Style::Glass];
        &STYLES
    }

    /// Exact id match; `None` for anything else.
    pub fn parse(name: &str) -> Option<Style> {
        Self::all().iter().copied().find(|s| s.id() == name)
    }

    /// Like [`parse`](Self::parse), but a typo falls back to the default
    /// style instead of failing.
    pub fn from_name(name: &str) -> Style {
        Self::parse(name.trim()).unwrap_or_default()
    }

    /// How far the topbar gradient's lower color is lifted from the topbar
    /// background.
    pub fn topbar_lift(self) -> i32 {
        match self {
            Self::Terminal => 14,
            Self::Dark => 10,
            Self::Glass => 8,
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

const fn grey(v: u8) -> Rgb {
    Rgb::new(v, v, v)
}

const ACCENT: Rgb = Rgb::new(60, 130, 255);

/// Fully populated theme for `style`.
pub fn build_style(style: Style) -> Theme {
    let mut theme = match style {
        Style::Terminal => Theme::from_parts(
            style,
            BaseColors {
                background: grey(244),
                surface: grey(255),
                surface2: grey(250),
                text: grey(25),
                muted: grey(110),
                border: grey(205),
                topbar_bg: grey(18),
                topbar_text: grey(230),
                accent: ACCENT,
            },
        ),
        Style::Dark => {
            let mut t = Theme::from_parts(
                style,
                BaseColors {
                    background: grey(24),
                    surface: grey(30),
                    surface2: grey(20),
                    text: grey(235),
                    muted: grey(160),
                    border: grey(70),
                    topbar_bg: grey(12),
                    topbar_text: grey(235),
                    accent: ACCENT,
                },
            );
            t.set_shadow_alpha(90);
            t
        }
        Style::Glass => {
            let mut t = Theme::from_parts(
                style,
                BaseColors {
                    background: Rgb::new(18, 18, 22),
                    surface: grey(255),
                    surface2: grey(255),
                    text: Rgb::new(240, 240, 245),
                    muted: Rgb::new(165, 165, 175),
                    border: grey(255),
                    topbar_bg: Rgb::new(12, 12, 14),
                    topbar_text: Rgb::new(235, 235, 240),
                    accent: ACCENT,
                },
            );
            t.set_border_alpha(55);
            t.set_shadow_alpha(170);
            t.set_radius(6);
            t
        }
    };
    theme.set_alpha(185);
    theme
}
