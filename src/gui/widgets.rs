//! Shared Screen Widgets
//!
//! Buttons, sliders, the background card, the controls legend and the
//! character figure. Widgets take their focus flag from the caller and never
//! touch `UiState` themselves.

use super::shapes::{draw_ellipse, draw_rounded_rect, fill_caret_down, fill_ellipse, fill_rounded_rect};
use super::{ACCENT, BLACK, DARKGRAY, WHITE};
use crate::slider::SliderModel;
use crate::text::{draw_text, draw_text_centered, text_height};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Scale of button labels and slider labels
pub const LABEL_SCALE: u32 = 2;

/// Scale of hints and small print
pub const SMALL_SCALE: u32 = 1;

/// Dark rounded card filling the screen minus an 8px margin
pub fn draw_panel(canvas: &mut Canvas<Window>) -> Result<(), String> {
    let (width, height) = canvas.logical_size();
    let card = Rect::new(8, 8, width.saturating_sub(16), height.saturating_sub(16));
    fill_rounded_rect(canvas, card, 10, DARKGRAY)?;
    draw_rounded_rect(canvas, card, 10, 2, BLACK)
}

/// Hint line centered near the bottom edge
pub fn draw_footer_hint(canvas: &mut Canvas<Window>, hint: &str) -> Result<(), String> {
    let (width, height) = canvas.logical_size();
    draw_text_centered(canvas, hint, (width / 2) as i32, height as i32 - 22, WHITE, SMALL_SCALE)
}

/// Keyboard-focusable button (display only; no mouse handling)
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
}

impl Button {
    pub fn new(rect: Rect, label: &str) -> Self {
        Button {
            rect,
            label: label.to_string(),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, focused: bool) -> Result<(), String> {
        let fill = if focused { ACCENT } else { WHITE };
        fill_rounded_rect(canvas, self.rect, 6, fill)?;
        draw_rounded_rect(canvas, self.rect, 6, 2, BLACK)?;

        let label_y = self.rect.center().y() - (text_height(LABEL_SCALE) / 2) as i32;
        draw_text_centered(
            canvas,
            &self.label,
            self.rect.center().x(),
            label_y,
            BLACK,
            LABEL_SCALE,
        )
    }
}

/// Horizontal slider track bound to a `SliderModel` at render time
#[derive(Debug, Clone)]
pub struct SliderWidget {
    pub track: Rect,
    pub label: String,
}

impl SliderWidget {
    pub fn new(track: Rect, label: &str) -> Self {
        SliderWidget {
            track,
            label: label.to_string(),
        }
    }

    /// X coordinate of the knob for a normalized value
    pub fn knob_x(&self, value: f64) -> i32 {
        self.track.x() + (value * self.track.width() as f64) as i32
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        model: &SliderModel,
        focused: bool,
    ) -> Result<(), String> {
        let track = self.track;

        // Label above the track
        let label = format!("{}:", self.label);
        draw_text(
            canvas,
            &label,
            track.x(),
            track.y() - text_height(LABEL_SCALE) as i32 - 1,
            WHITE,
            LABEL_SCALE,
        )?;

        // Track
        fill_rounded_rect(canvas, track, 3, DARKGRAY)?;
        draw_rounded_rect(canvas, track, 3, 1, BLACK)?;

        // Filled portion and knob
        let knob_x = self.knob_x(model.value());
        let filled = (knob_x - track.x()).max(0) as u32;
        if filled > 0 {
            fill_rounded_rect(
                canvas,
                Rect::new(track.x(), track.y(), filled, track.height()),
                3,
                ACCENT,
            )?;
        }
        canvas.set_draw_color(BLACK);
        canvas.fill_rect(Rect::new(knob_x - 2, track.y() - 2, 4, track.height() + 4))?;

        // Percentage to the right
        draw_text(
            canvas,
            &model.percent().to_string(),
            track.right() + 6,
            track.y() + 1,
            WHITE,
            SMALL_SCALE,
        )?;

        if focused {
            fill_caret_down(canvas, track.center().x(), track.bottom() + 1, 4, ACCENT)?;
        }

        Ok(())
    }
}

/// Small rounded key cap with a centered legend
fn draw_key_cap(canvas: &mut Canvas<Window>, rect: Rect, legend: &str) -> Result<(), String> {
    fill_rounded_rect(canvas, rect, 3, WHITE)?;
    draw_rounded_rect(canvas, rect, 3, 1, BLACK)?;
    let y = rect.center().y() - (text_height(SMALL_SCALE) / 2) as i32;
    draw_text_centered(canvas, legend, rect.center().x(), y, BLACK, SMALL_SCALE)
}

/// "CONTROLS" legend: W/A/S/D caps in a cross and a SPACE bar
///
/// Anchored to the bottom-right corner of the card.
pub fn draw_controls_hint(canvas: &mut Canvas<Window>) -> Result<(), String> {
    let (width, height) = canvas.logical_size();
    let right = width as i32;
    let top = height as i32 - 72;

    draw_text(canvas, "CONTROLS", right - 110, top, WHITE, SMALL_SCALE)?;

    let caps = [
        ("W", right - 84, top + 14),
        ("A", right - 100, top + 28),
        ("S", right - 84, top + 28),
        ("D", right - 68, top + 28),
    ];
    for (legend, x, y) in caps {
        draw_key_cap(canvas, Rect::new(x, y, 14, 12), legend)?;
    }

    draw_key_cap(canvas, Rect::new(right - 120, top + 46, 90, 12), "SPACE")
}

/// Simple 8-bit figure: colored body with a white round head
///
/// (`x`, `y`) is the top-left of the head; the figure is 20x40.
pub fn draw_character(canvas: &mut Canvas<Window>, body: Color, x: i32, y: i32) -> Result<(), String> {
    let torso = Rect::new(x, y + 12, 20, 28);
    canvas.set_draw_color(body);
    canvas.fill_rect(torso)?;
    canvas.set_draw_color(BLACK);
    canvas.draw_rect(torso)?;
    canvas.draw_rect(Rect::new(x + 1, y + 13, 18, 26))?;

    let head = Rect::new(x + 4, y, 12, 12);
    fill_ellipse(canvas, head, WHITE)?;
    draw_ellipse(canvas, head, 2, BLACK)
}
