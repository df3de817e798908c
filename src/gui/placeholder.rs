//! Stand-in for the screen after name entry

use super::widgets::LABEL_SCALE;
use super::{DARKGRAY, WHITE};
use crate::text::{draw_text_centered, text_height};
use sdl2::render::Canvas;
use sdl2::video::Window;

pub fn render(canvas: &mut Canvas<Window>) -> Result<(), String> {
    let (width, height) = canvas.logical_size();
    canvas.set_draw_color(DARKGRAY);
    canvas.fill_rect(None)?;

    let y = (height / 2) as i32 - (text_height(LABEL_SCALE) / 2) as i32;
    draw_text_centered(canvas, "NEXT PAGE PLACEHOLDER", (width / 2) as i32, y, WHITE, LABEL_SCALE)
}
