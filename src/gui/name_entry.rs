//! Name Entry Screen
//!
//! The chosen character stands above a white input box showing the typed name.

use super::widgets::{draw_character, draw_panel, SMALL_SCALE};
use super::shapes::{draw_rounded_rect, fill_rounded_rect};
use super::{character_color, BLACK, WHITE};
use crate::config::CharacterDef;
use crate::screen::UiState;
use crate::text::{draw_text, draw_text_centered, text_height, text_width};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const PROMPT: &str = "ENTER NAME: ";

pub fn render(
    canvas: &mut Canvas<Window>,
    state: &UiState,
    characters: &[CharacterDef],
) -> Result<(), String> {
    let (width, _) = canvas.logical_size();
    let center_x = (width / 2) as i32;
    draw_panel(canvas)?;

    if let Some(def) = characters.get(state.selected_character()) {
        draw_character(canvas, character_color(def), center_x - 10, 58)?;
    }

    let input_box = Rect::new(60, 130, width.saturating_sub(120), 20);
    fill_rounded_rect(canvas, input_box, 6, WHITE)?;
    draw_rounded_rect(canvas, input_box, 6, 2, BLACK)?;

    let text_x = input_box.x() + 6;
    let text_y = input_box.center().y() - (text_height(SMALL_SCALE) / 2) as i32;
    draw_text(canvas, PROMPT, text_x, text_y, BLACK, SMALL_SCALE)?;
    let name_x = text_x + text_width(PROMPT, SMALL_SCALE) as i32 + SMALL_SCALE as i32;
    draw_text(canvas, state.name().as_str(), name_x, text_y, BLACK, SMALL_SCALE)?;

    draw_text_centered(
        canvas,
        "PRESS SPACE TO ENTER",
        center_x,
        input_box.bottom() + 8,
        WHITE,
        SMALL_SCALE,
    )
}
