//! Title Screen
//!
//! Game title, START and CREDITS buttons, the stone settings pebble in the
//! top-right corner and the controls legend.

use super::shapes::{draw_ellipse, draw_rounded_rect, fill_ellipse};
use super::widgets::{draw_controls_hint, draw_panel, Button};
use super::{ACCENT, BLACK, STONE, WHITE};
use crate::screen::{TitleItem, UiState};
use crate::text::{draw_text_centered, text_height};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const TITLE_TEXT: &str = "GAME TITLE";
const TITLE_SCALE: u32 = 3;

/// Settings pebble bounds for a backbuffer `width` pixels wide
pub fn settings_pebble(width: u32) -> Rect {
    Rect::new(width as i32 - 36, 10, 26, 20)
}

pub fn render(canvas: &mut Canvas<Window>, state: &UiState) -> Result<(), String> {
    let (width, _) = canvas.logical_size();
    draw_panel(canvas)?;

    draw_text_centered(canvas, TITLE_TEXT, (width / 2) as i32, 34, WHITE, TITLE_SCALE)?;

    let focus = state.title_item();
    let start = Button::new(Rect::new(60, 90, width.saturating_sub(120), 26), "START");
    let credits = Button::new(Rect::new(85, 122, width.saturating_sub(170), 22), "CREDITS");
    start.render(canvas, focus == TitleItem::Start)?;
    credits.render(canvas, focus == TitleItem::Credits)?;

    let pebble = settings_pebble(width);
    fill_ellipse(canvas, pebble, STONE)?;
    draw_ellipse(canvas, pebble, 2, BLACK)?;
    let glyph_y = pebble.center().y() - (text_height(1) / 2) as i32;
    draw_text_centered(canvas, "*", pebble.center().x(), glyph_y, BLACK, 1)?;
    if focus == TitleItem::Settings {
        let ring = Rect::new(
            pebble.x() - 3,
            pebble.y() - 3,
            pebble.width() + 6,
            pebble.height() + 6,
        );
        draw_rounded_rect(canvas, ring, 8, 2, ACCENT)?;
    }

    draw_controls_hint(canvas)
}
