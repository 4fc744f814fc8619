//! Recognized config keys

pub const PANEL_LEFT: &str = "panel_left";
pub const PANEL_RIGHT: &str = "panel_right";
pub const PANEL_HEIGHT: &str = "panel_height";
pub const PANEL_MINIH: &str = "panel_minih";
pub const PANEL_ASCII: &str = "panel_ascii";
pub const PANEL_WATCH: &str = "panel_watch";
pub const PANEL_PAD: &str = "panel_pad";
pub const PANEL_GAP: &str = "panel_gap";
pub const PANEL_CHIP: &str = "panel_chip";
pub const PANEL_WS_MAXW: &str = "panel_ws_maxw";
pub const PANEL_WIN_MAXW: &str = "panel_win_maxw";
pub const PANEL_PLACEMENT: &str = "panel_placement";

pub const UI_STYLE: &str = "ui_style";
pub const UI_ALPHA: &str = "ui_alpha";
pub const UI_ACCENT: &str = "ui_accent";
pub const UI_TOPBG: &str = "ui_topbg";
pub const UI_TOPTEXT: &str = "ui_toptext";
pub const UI_BORDER_ALPHA: &str = "ui_border_alpha";
pub const UI_SHADOW_ALPHA: &str = "ui_shadow_alpha";
pub const UI_RADIUS: &str = "ui_radius";
pub const UI_FONT: &str = "ui_font";

pub const UI_TOPGRAD: &str = "ui_topgrad";
pub const UI_TOPGRAD0: &str = "ui_topgrad0";
pub const UI_TOPGRAD1: &str = "ui_topgrad1";
pub const UI_MINIGRAD: &str = "ui_minigrad";
pub const UI_MINIGRAD0: &str = "ui_minigrad0";
pub const UI_MINIGRAD1: &str = "ui_minigrad1";

pub const START_SHELL: &str = "start_shell";
pub const START_DEMO: &str = "start_demo";
pub const SESSION_MODE: &str = "session_mode";
pub const TEST_LAYOUT: &str = "test_layout";

/// Every key, in the order the config chain documents them.
pub const ALL: &[&str] = &[
    PANEL_LEFT,
    PANEL_RIGHT,
    PANEL_HEIGHT,
    PANEL_MINIH,
    PANEL_ASCII,
    PANEL_WATCH,
    PANEL_PAD,
    PANEL_GAP,
    PANEL_CHIP,
    PANEL_WS_MAXW,
    PANEL_WIN_MAXW,
    PANEL_PLACEMENT,
    UI_STYLE,
    UI_ALPHA,
    UI_ACCENT,
    UI_TOPBG,
    UI_TOPTEXT,
    UI_BORDER_ALPHA,
    UI_SHADOW_ALPHA,
    UI_RADIUS,
    UI_FONT,
    UI_TOPGRAD,
    UI_TOPGRAD0,
    UI_TOPGRAD1,
    UI_MINIGRAD,
    UI_MINIGRAD0,
    UI_MINIGRAD1,
    START_SHELL,
    START_DEMO,
    SESSION_MODE,
    TEST_LAYOUT,
];

/// Word-list keys; the writer quotes their values.
pub fn is_list(key: &str) -> bool {
    matches!(key, PANEL_LEFT | PANEL_RIGHT)
}

pub fn is_known(key: &str) -> bool {
    ALL.contains(&key)
}
