//! Screen Renderer
//!
//! Draws the current screen into the low-resolution backbuffer. The canvas
//! uses SDL2's logical size, so everything here works in backbuffer pixels and
//! SDL2 upscales with nearest-neighbour sampling for the chunky look.
//!
//! # Architecture
//!
//! - Read-only: takes `&UiState` and never mutates it
//! - Called once per frame, after every queued key event has been applied
//! - Procedural: rectangles and spans only, no textures or fonts on disk
//!
//! # Example Usage
//!
//! ```rust
//! canvas.set_draw_color(gui::BACKGROUND);
//! canvas.clear();
//! gui::render_screen(&mut canvas, &ui_state, &config)?;
//! canvas.present();
//! ```

pub mod character_select;
pub mod credits;
pub mod name_entry;
pub mod placeholder;
pub mod settings;
pub mod shapes;
pub mod title;
pub mod widgets;

use crate::config::{CharacterDef, UiConfig};
use crate::screen::{Screen, UiState};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const BACKGROUND: Color = Color::RGB(30, 30, 30);
pub const WHITE: Color = Color::RGB(245, 245, 245);
pub const BLACK: Color = Color::RGB(15, 15, 15);
pub const DARKGRAY: Color = Color::RGB(55, 55, 55);
/// Focus highlight
pub const ACCENT: Color = Color::RGB(120, 200, 255);
pub const STONE: Color = Color::RGB(170, 170, 170);

/// Body color of a catalog entry
pub fn character_color(def: &CharacterDef) -> Color {
    let [r, g, b] = def.body;
    Color::RGB(r, g, b)
}

/// Draw the screen `state` is currently on
pub fn render_screen(
    canvas: &mut Canvas<Window>,
    state: &UiState,
    config: &UiConfig,
) -> Result<(), String> {
    match state.screen() {
        Screen::Title => title::render(canvas, state),
        Screen::Settings => settings::render(canvas, state),
        Screen::Credits => credits::render(canvas, &config.credits),
        Screen::CharacterSelect => character_select::render(canvas, state, &config.characters),
        Screen::NameEntry => name_entry::render(canvas, state, &config.characters),
        Screen::Placeholder => placeholder::render(canvas),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_color() {
        let def = CharacterDef::new("Ember", [210, 90, 60]);
        assert_eq!(character_color(&def), Color::RGB(210, 90, 60));
    }
}
