use crate::prim::Painter;
use ui9_core::Rect;
use ui9_theme::ColorRole;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonKind {
    /// Accent fill, topbar text color.
    Primary,
    #[default]
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Normal,
    /// Flattened to the secondary surface.
    Pressed,
    /// Muted label.
    Disabled,
}

pub fn button(p: &mut Painter<'_>, r: Rect, label: &str, kind: ButtonKind, state: ButtonState) {
    let fill = match (kind, state) {
        (_, ButtonState::Pressed) => ColorRole::Surface2,
        (ButtonKind::Primary, _) => ColorRole::Accent,
        (ButtonKind::Secondary, _) => ColorRole::Surface2,
    };
    let (rad, fill) = (p.radius(), p.color(fill));
    p.round_rect(r, rad, fill);
    p.outline(r);

    let text = match (kind, state) {
        (_, ButtonState::Disabled) => ColorRole::Muted,
        (ButtonKind::Primary, _) => ColorRole::TopbarText,
        (ButtonKind::Secondary, _) => ColorRole::Text,
    };
    let at = p.centered(r, label);
    p.text(at, label, text);
}
