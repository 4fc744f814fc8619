//! Theme value

use crate::presets::Style;
use ui9_core::{clamp_i32, Rgb};

pub const MAX_RADIUS: i32 = 24;

/// Base colors every preset supplies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseColors {
    pub background: Rgb,
    pub surface: Rgb,
    pub surface2: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
    pub topbar_bg: Rgb,
    pub topbar_text: Rgb,
    pub accent: Rgb,
}

/// Style, geometry, alpha parameters and base colors.
///
/// Numeric fields are private so the ranges always hold: alphas are `u8`
/// and the radius is kept in `0..=24`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    style: Style,
    pad: i32,
    radius: i32,
    alpha: u8,
    border_alpha: u8,
    shadow_alpha: u8,
    pub colors: BaseColors,
}

impl Theme {
    /// Theme with the shared preset defaults (pad 12, radius 4, alpha 185,
    /// opaque border, no shadow).
    pub fn from_parts(style: Style, colors: BaseColors) -> Self {
        Self {
            style,
            pad: 12,
            radius: 4,
            alpha: 185,
            border_alpha: 255,
            shadow_alpha: 0,
            colors,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn pad(&self) -> i32 {
        self.pad
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Surface alpha ("glass strength"); only the Glass style uses it.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn border_alpha(&self) -> u8 {
        self.border_alpha
    }

    pub fn shadow_alpha(&self) -> u8 {
        self.shadow_alpha
    }

    pub fn set_alpha(&mut self, alpha: i32) {
        self.alpha = clamp_u8(alpha);
    }

    pub fn set_border_alpha(&mut self, alpha: i32) {
        self.border_alpha = clamp_u8(alpha);
    }

    pub fn set_shadow_alpha(&mut self, alpha: i32) {
        self.shadow_alpha = clamp_u8(alpha);
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.radius = clamp_i32(radius, 0, MAX_RADIUS);
    }

    /// Swap in the preset for `style`, keeping this theme's alpha.
    pub fn set_style(&mut self, style: Style) {
        let alpha = self.alpha;
        *self = crate::presets::build_style(style);
        self.alpha = alpha;
    }

    /// True when `other` differs only in geometry, so derived colors are
    /// unaffected.
    pub fn same_colors(&self, other: &Theme) -> bool {
        self.style == other.style
            && self.alpha == other.alpha
            && self.border_alpha == other.border_alpha
            && self.shadow_alpha == other.shadow_alpha
            && self.colors == other.colors
    }
}

impl Default for Theme {
    fn default() -> Self {
        crate::presets::build_style(Style::default())
    }
}

fn clamp_u8(v: i32) -> u8 {
    clamp_i32(v, 0, 255) as u8
}
