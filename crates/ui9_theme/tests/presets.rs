use ui9_config::{ConfigSnapshot, MapEnv};
use ui9_core::{parse_hex_rgb, Rgb};
use ui9_theme::{build_style, ColorRole, DerivedTokens, Style, ThemeEngine};

#[test]
fn preset_catalog_contains_expected_styles() {
    let ids: Vec<&str> = Style::all().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["terminal", "dark", "glass"]);
}

#[test]
fn only_glass_is_translucent() {
    for style in Style::all() {
        let tokens = DerivedTokens::derive(&build_style(*style));
        let surface = tokens.get(ColorRole::Surface);
        if *style == Style::Glass {
            assert_eq!(surface.a, 185, "{style}");
            assert_eq!(tokens.get(ColorRole::Surface2).a, 210, "{style}");
        } else {
            assert!(surface.is_opaque(), "{style}");
        }
    }
}

#[test]
fn config_file_style_and_alpha_rebuild_once() {
    let mut cfg = ConfigSnapshot::default();
    cfg.merge_from_str("ui_style=dark\nui_alpha=200\n");
    let env = MapEnv::new();
    cfg.merge_from_environment(&env);

    let mut engine = ThemeEngine::default();
    let before = engine.generation();
    engine.apply_appearance(&cfg.appearance, &env);

    let mut expected = build_style(Style::Dark);
    expected.set_alpha(200);
    assert_eq!(*engine.theme(), expected);
    assert_eq!(*engine.tokens(), DerivedTokens::derive(&expected));
    assert_eq!(engine.generation(), before + 1);
}

#[test]
fn malformed_hex_keeps_previous_color() {
    let mut engine = ThemeEngine::new(Style::Dark);
    let accent = engine.theme().colors.accent;

    for bad in ["3c82f", "zzzzzz", "#3c82ff0", ""] {
        engine.apply_environment_overrides(&MapEnv::new().with("ui_accent", bad));
        assert_eq!(engine.theme().colors.accent, accent, "{bad:?}");
    }

    for good in ["#3c82ff", "3c82ff", "0x3c82ff"] {
        assert_eq!(parse_hex_rgb(good), Some(Rgb::from_hex(0x3c82ff)));
    }
}

#[test]
fn topbar_override_fills_missing_half_from_theme() {
    let mut cfg = ConfigSnapshot::default();
    cfg.merge_from_str("ui_style=glass\nui_toptext=#ff0000\nui_topbg=nothex\n");

    let mut engine = ThemeEngine::default();
    engine.apply_appearance(&cfg.appearance, &MapEnv::new());

    let glass = build_style(Style::Glass);
    assert_eq!(engine.color(ColorRole::TopbarText).rgb, Rgb::new(255, 0, 0));
    assert_eq!(engine.color(ColorRole::TopbarBg).rgb, glass.colors.topbar_bg);
}
