//! Theme engine
//!
//! Owns the current [`Theme`] and its [`DerivedTokens`]. There is no global
//! instance; each surface holds its own engine in its application context.

use crate::presets::{build_style, Style};
use crate::theme::Theme;
use crate::tokens::{ColorRole, DerivedTokens};
use ui9_config::{clean_value, keys, parse_int, AppearanceConfig, Environment};
use ui9_core::{parse_hex_rgb, Rgb, Rgba};

#[derive(Debug)]
pub struct ThemeEngine {
    theme: Theme,
    tokens: DerivedTokens,
    generation: u64,
}

impl ThemeEngine {
    pub fn new(style: Style) -> Self {
        let theme = build_style(style);
        Self {
            tokens: DerivedTokens::derive(&theme),
            theme,
            generation: 1,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn tokens(&self) -> &DerivedTokens {
        &self.tokens
    }

    pub fn color(&self, role: ColorRole) -> Rgba {
        self.tokens.get(role)
    }

    /// Number of token rebuilds so far, including the initial one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn rebuild(&mut self) {
        self.tokens = DerivedTokens::derive(&self.theme);
        self.generation += 1;
        tracing::debug!(
            style = %self.theme.style(),
            alpha = self.theme.alpha(),
            generation = self.generation,
            "theme tokens rebuilt"
        );
    }

    pub fn set_alpha(&mut self, alpha: i32) {
        self.theme.set_alpha(alpha);
        self.rebuild();
    }

    /// Switch preset. The current alpha survives the switch.
    pub fn set_style(&mut self, style: Style) {
        self.theme.set_style(style);
        self.rebuild();
    }

    pub fn set_accent(&mut self, accent: Rgb) {
        self.theme.colors.accent = accent;
        self.rebuild();
    }

    pub fn set_topbar(&mut self, bg: Rgb, text: Rgb) {
        self.theme.colors.topbar_bg = bg;
        self.theme.colors.topbar_text = text;
        self.rebuild();
    }

    pub fn set_border_alpha(&mut self, alpha: i32) {
        self.theme.set_border_alpha(alpha);
        self.rebuild();
    }

    pub fn set_shadow_alpha(&mut self, alpha: i32) {
        self.theme.set_shadow_alpha(alpha);
        self.rebuild();
    }

    /// Geometry only; tokens are left alone.
    pub fn set_radius(&mut self, radius: i32) {
        self.theme.set_radius(radius);
    }

    /// Edit a copy of the theme, then commit it with at most one rebuild.
    ///
    /// The rebuild is skipped when only geometry changed.
    pub fn update(&mut self, edit: impl FnOnce(&mut Theme)) {
        let mut next = self.theme;
        edit(&mut next);
        let recolor = !next.same_colors(&self.theme);
        self.theme = next;
        if recolor {
            self.rebuild();
        }
    }

    /// Apply `ui_style`, `ui_alpha`, `ui_accent`, `ui_topbg`, `ui_toptext`,
    /// `ui_border_alpha`, `ui_shadow_alpha` and `ui_radius` from `env`.
    ///
    /// Colors that fail to parse leave the previous value in place.
    pub fn apply_environment_overrides(&mut self, env: &dyn Environment) {
        self.update(|t| environment_overrides(t, env));
    }

    /// Reset to the default preset, then apply configured overrides and
    /// environment overrides as a single change.
    ///
    /// Used on boot and on every reload, so an override dropped from the
    /// config reverts to the preset's value.
    pub fn apply_appearance(&mut self, cfg: &AppearanceConfig, env: &dyn Environment) {
        let mut next = Theme::default();
        configured_overrides(&mut next, cfg);
        environment_overrides(&mut next, env);

        self.theme = next;
        self.rebuild();
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

fn configured_overrides(t: &mut Theme, cfg: &AppearanceConfig) {
    if let Some(style) = cfg.style.as_deref() {
        t.set_style(Style::from_name(style));
    }
    if let Some(alpha) = cfg.alpha {
        t.set_alpha(alpha);
    }
    if let Some(accent) = cfg.accent {
        t.colors.accent = accent;
    }
    // Only the half that parsed is replaced.
    if let Some(bg) = cfg.topbar_bg {
        t.colors.topbar_bg = bg;
    }
    if let Some(text) = cfg.topbar_text {
        t.colors.topbar_text = text;
    }
    if let Some(alpha) = cfg.border_alpha {
        t.set_border_alpha(alpha);
    }
    if let Some(alpha) = cfg.shadow_alpha {
        t.set_shadow_alpha(alpha);
    }
    if let Some(radius) = cfg.radius {
        t.set_radius(radius);
    }
}

fn environment_overrides(t: &mut Theme, env: &dyn Environment) {
    let var = |key: &str| env.var(key).map(|raw| clean_value(&raw).to_string());

    if let Some(style) = var(keys::UI_STYLE) {
        t.set_style(Style::from_name(&style));
    }
    if let Some(alpha) = var(keys::UI_ALPHA) {
        t.set_alpha(parse_int(&alpha));
    }

    let hex = |key: &str| var(key).as_deref().and_then(parse_hex_rgb);
    if let Some(accent) = hex(keys::UI_ACCENT) {
        t.colors.accent = accent;
    }
    if let Some(bg) = hex(keys::UI_TOPBG) {
        t.colors.topbar_bg = bg;
    }
    if let Some(text) = hex(keys::UI_TOPTEXT) {
        t.colors.topbar_text = text;
    }

    if let Some(alpha) = var(keys::UI_BORDER_ALPHA) {
        t.set_border_alpha(parse_int(&alpha));
    }
    if let Some(alpha) = var(keys::UI_SHADOW_ALPHA) {
        t.set_shadow_alpha(parse_int(&alpha));
    }
    if let Some(radius) = var(keys::UI_RADIUS) {
        t.set_radius(parse_int(&radius));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui9_config::MapEnv;

    #[test]
    fn test_every_color_setter_rebuilds() {
        let mut e = ThemeEngine::new(Style::Glass);
        let g0 = e.generation();

        e.set_alpha(100);
        e.set_accent(Rgb::new(1, 2, 3));
        e.set_topbar(Rgb::BLACK, Rgb::WHITE);
        e.set_border_alpha(10);
        e.set_shadow_alpha(20);
        e.set_style(Style::Dark);
        assert_eq!(e.generation(), g0 + 6);

        e.set_radius(9);
        assert_eq!(e.generation(), g0 + 6);
        assert_eq!(e.theme().radius(), 9);
    }

    #[test]
    fn test_tokens_match_theme_after_each_setter() {
        let mut e = ThemeEngine::new(Style::Glass);
        e.set_alpha(120);
        assert_eq!(*e.tokens(), DerivedTokens::derive(e.theme()));
        assert_eq!(e.color(ColorRole::Surface).a, 120);
        assert_eq!(e.color(ColorRole::Surface2).a, 145);

        e.set_accent(Rgb::new(200, 10, 10));
        assert_eq!(*e.tokens(), DerivedTokens::derive(e.theme()));
        assert_eq!(e.color(ColorRole::Accent).rgb, Rgb::new(200, 10, 10));
        assert_eq!(e.color(ColorRole::Accent2).rgb, Rgb::new(200, 10, 10));
    }

    #[test]
    fn test_environment_overrides() {
        let env = MapEnv::new()
            .with("ui_style", "glass")
            .with("ui_alpha", "90")
            .with("ui_accent", "0x112233")
            .with("ui_topbg", "bogus")
            .with("ui_toptext", "#abcdef")
            .with("ui_radius", "30");

        let mut e = ThemeEngine::new(Style::Terminal);
        let g0 = e.generation();
        e.apply_environment_overrides(&env);

        let t = e.theme();
        assert_eq!(t.style(), Style::Glass);
        assert_eq!(t.alpha(), 90);
        assert_eq!(t.colors.accent, Rgb::from_hex(0x112233));
        assert_eq!(t.colors.topbar_bg, build_style(Style::Glass).colors.topbar_bg);
        assert_eq!(t.colors.topbar_text, Rgb::from_hex(0xabcdef));
        assert_eq!(t.radius(), 24);
        assert_eq!(e.generation(), g0 + 1);
    }

    #[test]
    fn test_empty_environment_skips_rebuild() {
        let mut e = ThemeEngine::default();
        let g0 = e.generation();
        e.apply_environment_overrides(&MapEnv::new());
        assert_eq!(e.generation(), g0);
    }

    #[test]
    fn test_appearance_resets_dropped_overrides() {
        let env = MapEnv::new();
        let mut e = ThemeEngine::default();

        let cfg = AppearanceConfig {
            accent: Some(Rgb::new(9, 9, 9)),
            ..AppearanceConfig::default()
        };
        e.apply_appearance(&cfg, &env);
        assert_eq!(e.theme().colors.accent, Rgb::new(9, 9, 9));

        e.apply_appearance(&AppearanceConfig::default(), &env);
        assert_eq!(*e.theme(), Theme::default());
    }

    #[test]
    fn test_environment_beats_config() {
        let cfg = AppearanceConfig {
            style: Some("dark".into()),
            alpha: Some(40),
            ..AppearanceConfig::default()
        };
        let env = MapEnv::new().with("ui_alpha", "77");

        let mut e = ThemeEngine::default();
        e.apply_appearance(&cfg, &env);
        assert_eq!(e.theme().style(), Style::Dark);
        assert_eq!(e.theme().alpha(), 77);
    }
}
