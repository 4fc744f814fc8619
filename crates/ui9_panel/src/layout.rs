//! Top bar geometry

use ui9_core::Rect;

/// Module rectangles for both stacks of `bar`.
///
/// The left stack starts one `gap` in from the left edge; the right stack is
/// right-aligned one `gap` in from the right edge. Every rectangle spans the
/// bar height minus two pixels top and bottom.
pub fn stack_layout(bar: Rect, left: &[i32], right: &[i32], gap: i32) -> (Vec<Rect>, Vec<Rect>) {
    let cell = |x: i32, w: i32| Rect::new(x, bar.min.y + 2, x + w, bar.max.y - 2);

    let mut x = bar.min.x + gap;
    let mut lrects = Vec::with_capacity(left.len());
    for &w in left {
        lrects.push(cell(x, w));
        x += w + gap;
    }

    let mut x = bar.max.x - gap - stack_width(right, gap);
    let mut rrects = Vec::with_capacity(right.len());
    for &w in right {
        rrects.push(cell(x, w));
        x += w + gap;
    }
    (lrects, rrects)
}

/// Sum of `widths` plus one `gap` between neighbours.
pub fn stack_width(widths: &[i32], gap: i32) -> i32 {
    let gaps = widths.len().saturating_sub(1) as i32;
    widths.iter().sum::<i32>() + gaps * gap
}

/// The strip of height `mini` below a bar of height `base`.
pub fn mini_rect(surface: Rect, base: i32, mini: i32) -> Rect {
    let top = surface.min.y + base;
    Rect::new(surface.min.x, top, surface.max.x, top + mini)
}

/// [`mini_rect`], if the surface is tall enough to show it.
pub fn mini_bar(surface: Rect, base: i32, mini: i32) -> Option<Rect> {
    (surface.dy() >= base + mini).then(|| mini_rect(surface, base, mini))
}
