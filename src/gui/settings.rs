//! Settings Screen
//!
//! Volume and brightness sliders. W/S pick a slider, A/D adjust it.

use super::widgets::{draw_footer_hint, draw_panel, SliderWidget};
use crate::screen::{SettingsItem, UiState};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const HINT: &str = "W/S: select slider   A/D: adjust   SPACE: back";

pub fn render(canvas: &mut Canvas<Window>, state: &UiState) -> Result<(), String> {
    let (width, _) = canvas.logical_size();
    draw_panel(canvas)?;

    let track_width = width.saturating_sub(160);
    let volume = SliderWidget::new(Rect::new(80, 110, track_width, 10), "VOLUME");
    let brightness = SliderWidget::new(Rect::new(80, 140, track_width, 10), "BRIGHTNESS");

    let focus = state.settings_item();
    volume.render(canvas, state.volume(), focus == SettingsItem::Volume)?;
    brightness.render(canvas, state.brightness(), focus == SettingsItem::Brightness)?;

    draw_footer_hint(canvas, HINT)
}
