//! Color values
//!
//! Theme base colors are plain 24-bit RGB. Anything handed to a canvas is an
//! [`Rgba`] so style-controlled transparency (glass surfaces, borders,
//! shadows) travels with the color.

use std::fmt;

/// Clamp an integer into `[lo, hi]`.
pub fn clamp_i32(v: i32, lo: i32, hi: i32) -> i32 {
    v.max(lo).min(hi)
}

/// A 24-bit RGB color stored as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WHITE: Rgb = Rgb(0xFFFFFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build from a `0xRRGGBB` literal; bits above 24 are discarded.
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00FF_FFFF)
    }

    pub const fn to_hex(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Add `delta` to every channel, saturating at 0 and 255.
    pub fn lift(self, delta: i32) -> Self {
        let ch = |c: u8| clamp_i32(c as i32 + delta, 0, 255) as u8;
        Self::new(ch(self.r()), ch(self.g()), ch(self.b()))
    }

    /// Integer interpolation `a + (b - a) * t / tmax` per channel.
    ///
    /// `t` is expected in `[0, tmax]`; `tmax` must be positive.
    pub fn lerp(a: Rgb, b: Rgb, t: i32, tmax: i32) -> Self {
        let ch = |x: u8, y: u8| {
            let x = x as i32;
            let y = y as i32;
            clamp_i32(x + (y - x) * t / tmax, 0, 255) as u8
        };
        Self::new(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
    }

    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba { rgb: self, a }
    }

    pub const fn opaque(self) -> Rgba {
        self.with_alpha(255)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// A drawable color: RGB plus an 8-bit alpha (255 = opaque).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        rgb: Rgb::BLACK,
        a: 0,
    };

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

/// Parse `#RRGGBB`, `RRGGBB` or `0xRRGGBB` (case-insensitive).
///
/// Leading blanks are skipped. Exactly six hex digits must follow the
/// optional prefix; anything else returns `None` so callers keep their
/// previous color.
pub fn parse_hex_rgb(s: &str) -> Option<Rgb> {
    let s = s.trim_start_matches([' ', '\t']);
    let s = s.strip_prefix('#').unwrap_or(s);
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if s.len() != 6 || !s.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok().map(Rgb::from_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms_agree() {
        let want = Some(Rgb::from_hex(0x3c82ff));
        assert_eq!(parse_hex_rgb("#3c82ff"), want);
        assert_eq!(parse_hex_rgb("3c82ff"), want);
        assert_eq!(parse_hex_rgb("0x3c82ff"), want);
        assert_eq!(parse_hex_rgb("0X3C82FF"), want);
        assert_eq!(parse_hex_rgb("  #3C82FF"), want);
    }

    #[test]
    fn test_hex_rejects_malformed() {
        assert_eq!(parse_hex_rgb("3c82f"), None);
        assert_eq!(parse_hex_rgb("zzzzzz"), None);
        assert_eq!(parse_hex_rgb("#3c82ff0"), None);
        assert_eq!(parse_hex_rgb(""), None);
        assert_eq!(parse_hex_rgb("#"), None);
        assert_eq!(parse_hex_rgb("+3c82f"), None);
    }

    #[test]
    fn test_channels() {
        let c = Rgb::new(60, 130, 255);
        assert_eq!((c.r(), c.g(), c.b()), (60, 130, 255));
        assert_eq!(c.to_hex(), 0x3c82ff);
        assert_eq!(c.to_string(), "#3c82ff");
    }

    #[test]
    fn test_lift_saturates() {
        let c = Rgb::new(250, 5, 128);
        assert_eq!(c.lift(10), Rgb::new(255, 15, 138));
        assert_eq!(c.lift(-10), Rgb::new(240, 0, 118));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(255, 0, 100);
        assert_eq!(Rgb::lerp(a, b, 0, 255), a);
        assert_eq!(Rgb::lerp(a, b, 255, 255), b);
        assert_eq!(Rgb::lerp(a, b, 51, 255), Rgb::new(51, 80, 180));
    }
}
