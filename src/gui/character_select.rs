//! Character Selection Screen
//!
//! Shows up to three catalog entries side by side with the selection boxed.
//! Larger catalogs scroll so the selection is always visible.

use super::widgets::{draw_character, draw_panel, LABEL_SCALE, SMALL_SCALE};
use super::{character_color, ACCENT, WHITE};
use crate::config::CharacterDef;
use crate::screen::UiState;
use crate::text::draw_text_centered;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Figures shown at once
pub const LINEUP_SLOTS: usize = 3;

/// Horizontal distance between figure centers
const SLOT_SPACING: i32 = 60;

/// Top of the figures' heads
const FIGURE_Y: i32 = 70;

/// First catalog index shown in the lineup
///
/// Keeps the selection in the middle slot when possible, pinned to either end
/// of the catalog otherwise.
pub fn lineup_start(selected: usize, count: usize) -> usize {
    if count <= LINEUP_SLOTS {
        return 0;
    }
    selected.saturating_sub(LINEUP_SLOTS / 2).min(count - LINEUP_SLOTS)
}

pub fn render(
    canvas: &mut Canvas<Window>,
    state: &UiState,
    characters: &[CharacterDef],
) -> Result<(), String> {
    let (width, _) = canvas.logical_size();
    let center_x = (width / 2) as i32;
    draw_panel(canvas)?;

    draw_text_centered(canvas, "CHOOSE YOUR CHARACTER", center_x, 30, WHITE, LABEL_SCALE)?;
    draw_text_centered(canvas, "A/D: switch    SPACE: enter", center_x, 54, WHITE, SMALL_SCALE)?;

    let selected = state.selected_character();
    let start = lineup_start(selected, characters.len());
    let shown = characters.len().min(LINEUP_SLOTS);
    // Center the lineup whatever its length
    let first_x = center_x - SLOT_SPACING * (shown as i32 - 1) / 2;

    for (slot, (index, def)) in characters.iter().enumerate().skip(start).take(shown).enumerate() {
        let cx = first_x + slot as i32 * SLOT_SPACING;
        draw_character(canvas, character_color(def), cx - 10, FIGURE_Y)?;
        if index == selected {
            canvas.set_draw_color(ACCENT);
            canvas.draw_rect(Rect::new(cx - 16, FIGURE_Y - 6, 32, 48))?;
            canvas.draw_rect(Rect::new(cx - 15, FIGURE_Y - 5, 30, 46))?;
        }
    }

    if let Some(def) = characters.get(selected) {
        draw_text_centered(canvas, &def.name, center_x, FIGURE_Y + 56, WHITE, LABEL_SCALE)?;
    }

    Ok(())
}
