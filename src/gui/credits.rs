//! Credits Screen

use super::widgets::{draw_footer_hint, draw_panel, SMALL_SCALE};
use super::WHITE;
use crate::text::draw_text;
use sdl2::render::Canvas;
use sdl2::video::Window;

const LINE_SPACING: i32 = 14;

pub fn render(canvas: &mut Canvas<Window>, lines: &[String]) -> Result<(), String> {
    draw_panel(canvas)?;

    let mut y = 30;
    for line in lines {
        draw_text(canvas, line, 24, y, WHITE, SMALL_SCALE)?;
        y += LINE_SPACING;
    }

    draw_footer_hint(canvas, "PRESS SPACE TO GO BACK")
}
