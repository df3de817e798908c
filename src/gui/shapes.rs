//! Pixel-Art Shape Primitives
//!
//! SDL2's canvas only draws axis-aligned rectangles, so rounded corners,
//! ellipses and the focus caret are rasterized here as horizontal spans.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Horizontal inset of row `dy` (0 = outermost row) of a corner with radius `r`
pub fn corner_inset(dy: u32, radius: u32) -> u32 {
    if dy >= radius {
        return 0;
    }
    let r = radius as f32;
    let from_center = r - dy as f32 - 0.5;
    let half_chord = (r * r - from_center * from_center).max(0.0).sqrt();
    (r - half_chord).round() as u32
}

/// Clamp the radius so opposite corners never overlap
fn effective_radius(rect: Rect, radius: u32) -> u32 {
    radius.min(rect.width() / 2).min(rect.height() / 2)
}

/// Filled rectangle with pixel-stepped rounded corners
pub fn fill_rounded_rect(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    radius: u32,
    color: Color,
) -> Result<(), String> {
    let r = effective_radius(rect, radius);
    canvas.set_draw_color(color);

    // Middle band without any inset
    if rect.height() > 2 * r {
        canvas.fill_rect(Rect::new(rect.x(), rect.y() + r as i32, rect.width(), rect.height() - 2 * r))?;
    }

    for dy in 0..r {
        let inset = corner_inset(dy, r);
        let width = rect.width().saturating_sub(2 * inset);
        if width == 0 {
            continue;
        }
        let x = rect.x() + inset as i32;
        canvas.fill_rect(Rect::new(x, rect.y() + dy as i32, width, 1))?;
        canvas.fill_rect(Rect::new(x, rect.bottom() - 1 - dy as i32, width, 1))?;
    }

    Ok(())
}

/// Rounded rectangle outline, `thickness` pixels wide, drawn inward
pub fn draw_rounded_rect(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    radius: u32,
    thickness: u32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    for k in 0..thickness {
        let k = k as i32;
        let w = rect.width() as i32 - 2 * k;
        let h = rect.height() as i32 - 2 * k;
        if w <= 0 || h <= 0 {
            break;
        }
        let ring = Rect::new(rect.x() + k, rect.y() + k, w as u32, h as u32);
        stroke_rounded(canvas, ring, effective_radius(ring, radius.saturating_sub(k as u32)))?;
    }

    Ok(())
}

/// Single-pixel rounded outline
fn stroke_rounded(canvas: &mut Canvas<Window>, rect: Rect, r: u32) -> Result<(), String> {
    let left = rect.x();
    let right = rect.right() - 1;
    let top = rect.y();
    let bottom = rect.bottom() - 1;

    // Straight edges
    let edge_w = rect.width().saturating_sub(2 * corner_inset(0, r)).max(1);
    let edge_x = left + corner_inset(0, r) as i32;
    canvas.fill_rect(Rect::new(edge_x, top, edge_w, 1))?;
    canvas.fill_rect(Rect::new(edge_x, bottom, edge_w, 1))?;
    if rect.height() > 2 * r {
        let side_h = rect.height() - 2 * r;
        canvas.fill_rect(Rect::new(left, top + r as i32, 1, side_h))?;
        canvas.fill_rect(Rect::new(right, top + r as i32, 1, side_h))?;
    }

    // Corner rows: span from this row's inset back to the previous row's,
    // so the stepped edge stays connected.
    for dy in 1..r {
        let inset = corner_inset(dy, r) as i32;
        let prev = corner_inset(dy - 1, r) as i32;
        let span = (prev - inset).max(1) as u32;
        let y_top = top + dy as i32;
        let y_bottom = bottom - dy as i32;
        for y in [y_top, y_bottom] {
            canvas.fill_rect(Rect::new(left + inset, y, span, 1))?;
            canvas.fill_rect(Rect::new(right - inset - span as i32 + 1, y, span, 1))?;
        }
    }

    Ok(())
}

/// Half-width of an ellipse row, measured from the vertical axis
fn ellipse_half_width(row: u32, width: u32, height: u32) -> f32 {
    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;
    let dy = (row as f32 + 0.5 - ry) / ry;
    rx * (1.0 - dy * dy).max(0.0).sqrt()
}

/// Filled ellipse inscribed in `rect`
pub fn fill_ellipse(canvas: &mut Canvas<Window>, rect: Rect, color: Color) -> Result<(), String> {
    canvas.set_draw_color(color);
    let cx = rect.x() as f32 + rect.width() as f32 / 2.0;

    for row in 0..rect.height() {
        let half = ellipse_half_width(row, rect.width(), rect.height());
        let x0 = (cx - half).round() as i32;
        let x1 = (cx + half).round() as i32;
        if x1 > x0 {
            canvas.fill_rect(Rect::new(x0, rect.y() + row as i32, (x1 - x0) as u32, 1))?;
        }
    }

    Ok(())
}

/// Ellipse outline inscribed in `rect`, `thickness` pixels wide
pub fn draw_ellipse(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    thickness: u32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    let cx = rect.x() as f32 + rect.width() as f32 / 2.0;
    let inner_w = rect.width().saturating_sub(2 * thickness);
    let inner_h = rect.height().saturating_sub(2 * thickness);

    for row in 0..rect.height() {
        let outer = ellipse_half_width(row, rect.width(), rect.height());
        let inner = if inner_w > 0 && row >= thickness && row < thickness + inner_h {
            ellipse_half_width(row - thickness, inner_w, inner_h)
        } else {
            0.0
        };

        let y = rect.y() + row as i32;
        let (ox0, ox1) = ((cx - outer).round() as i32, (cx + outer).round() as i32);
        let (ix0, ix1) = ((cx - inner).round() as i32, (cx + inner).round() as i32);
        if ix1 <= ix0 {
            if ox1 > ox0 {
                canvas.fill_rect(Rect::new(ox0, y, (ox1 - ox0) as u32, 1))?;
            }
            continue;
        }
        if ix0 > ox0 {
            canvas.fill_rect(Rect::new(ox0, y, (ix0 - ox0) as u32, 1))?;
        }
        if ox1 > ix1 {
            canvas.fill_rect(Rect::new(ix1, y, (ox1 - ix1) as u32, 1))?;
        }
    }

    Ok(())
}

/// Downward-pointing triangle: base row at `top`, apex `half_width` rows below
pub fn fill_caret_down(
    canvas: &mut Canvas<Window>,
    center_x: i32,
    top: i32,
    half_width: u32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    for i in 0..=half_width {
        let half = (half_width - i) as i32;
        canvas.fill_rect(Rect::new(center_x - half, top + i as i32, (2 * half + 1) as u32, 1))?;
    }
    Ok(())
}
