//! Window scale selection
//!
//! The window is an integer multiple of the backbuffer so every logical pixel
//! maps to a square block of screen pixels.

use crate::config::WindowConfig;

/// Largest integer scale that fits the usable desktop area, clamped to the
/// configured range.
///
/// 10% of each dimension is left free for taskbars and decorations.
pub fn fit_scale(display_w: i32, display_h: i32, window: &WindowConfig) -> u32 {
    let usable_w = (display_w as f32 * 0.9) as i32;
    let usable_h = (display_h as f32 * 0.9) as i32;

    let max_scale_w = usable_w / window.base_width as i32;
    let max_scale_h = usable_h / window.base_height as i32;

    let scale = max_scale_w.min(max_scale_h).max(0) as u32;
    scale.clamp(window.min_scale, window.max_scale)
}

/// Pick the window scale for the primary display
pub fn window_scale(video_subsystem: &sdl2::VideoSubsystem, window: &WindowConfig) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(mode) => {
            let scale = fit_scale(mode.w, mode.h, window);
            tracing::info!(display_w = mode.w, display_h = mode.h, scale, "selected window scale");
            scale
        }
        Err(e) => {
            let scale = window.fallback_scale.clamp(window.min_scale, window.max_scale);
            tracing::warn!(error = %e, scale, "could not detect monitor size, using fallback scale");
            scale
        }
    }
}
