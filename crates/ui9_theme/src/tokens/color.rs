//! Color tokens for drawing

use crate::presets::Style;
use crate::theme::Theme;
use ui9_core::{Rgb, Rgba};

/// Semantic color roles widgets draw with
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Surfaces
    Background,
    Surface,
    Surface2,

    // Text
    Text,
    Muted,

    // Edges
    Border,
    Shadow,

    // Accent
    Accent,
    /// Accent at low alpha, for selection and hover fills.
    Accent2,

    // Topbar
    TopbarBg,
    TopbarText,
}

impl ColorRole {
    pub const COUNT: usize = 11;

    pub fn all() -> &'static [ColorRole; Self::COUNT] {
        const ROLES: [ColorRole; ColorRole::COUNT] = [
            ColorRole::Background,
            ColorRole::Surface,
            ColorRole::Surface2,
            ColorRole::Text,
            ColorRole::Muted,
            ColorRole::Border,
            ColorRole::Shadow,
            ColorRole::Accent,
            ColorRole::Accent2,
            ColorRole::TopbarBg,
            ColorRole::TopbarText,
        ];
        &ROLES
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One drawable color per role, all derived from the same theme.
///
/// Never patched in place: a theme change produces a whole new set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedTokens {
    colors: [Rgba; ColorRole::COUNT],
}

impl DerivedTokens {
    /// Apply the alpha rules: Glass surfaces take the theme alpha (the
    /// secondary surface 25 more), every other style draws them opaque.
    pub fn derive(theme: &Theme) -> Self {
        let c = &theme.colors;
        let glass = theme.style() == Style::Glass;
        let (surface_a, surface2_a) = if glass {
            (theme.alpha(), theme.alpha().saturating_add(25))
        } else {
            (255, 255)
        };

        let mut colors = [Rgba::TRANSPARENT; ColorRole::COUNT];
        for role in ColorRole::all() {
            colors[role.index()] = match role {
                ColorRole::Background => c.background.opaque(),
                ColorRole::Surface => c.surface.with_alpha(surface_a),
                ColorRole::Surface2 => c.surface2.with_alpha(surface2_a),
                ColorRole::Text => c.text.opaque(),
                ColorRole::Muted => c.muted.opaque(),
                ColorRole::Border => c.border.with_alpha(theme.border_alpha()),
                ColorRole::Shadow => Rgb::BLACK.with_alpha(theme.shadow_alpha()),
                ColorRole::Accent => c.accent.opaque(),
                ColorRole::Accent2 => c.accent.with_alpha(40),
                ColorRole::TopbarBg => c.topbar_bg.opaque(),
                ColorRole::TopbarText => c.topbar_text.opaque(),
            };
        }
        Self { colors }
    }

    pub fn get(&self, role: ColorRole) -> Rgba {
        self.colors[role.index()]
    }
}
