use sdl2::event::Event;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

mod config;
mod display;
mod error;
mod focus;
mod gui;
mod input_system;
mod name_buffer;
mod screen;
mod slider;
mod text;

use config::{ConfigSource, UiConfig};
use error::AppError;
use input_system::{InputAction, InputSystem};
use screen::UiState;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn main() -> Result<(), AppError> {
    init_tracing();

    let (config, source) = UiConfig::load()?;
    match &source {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "loaded UI config"),
        ConfigSource::Defaults => tracing::info!("no UI config file found, using built-in defaults"),
    }

    run(&config)
}

/// Open the window and run the menu loop until the window is closed
fn run(config: &UiConfig) -> Result<(), AppError> {
    let window_config = &config.window;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    // Nearest-neighbour upscaling keeps the pixels square
    sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "0");

    let scale = display::window_scale(&video_subsystem, window_config);
    let window_width = window_config.base_width * scale;
    let window_height = window_config.base_height * scale;

    let window = video_subsystem
        .window(&window_config.title, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size is the low-resolution backbuffer; SDL2 scales it up
    canvas
        .set_logical_size(window_config.base_width, window_config.base_height)
        .map_err(|e| e.to_string())?;
    canvas.set_integer_scale(true)?;

    // Typed characters arrive as text input events; navigation screens ignore them
    video_subsystem.text_input().start();

    let mut event_pump = sdl_context.event_pump()?;
    let mut input = InputSystem::new();
    let mut ui_state = UiState::new(config);

    let frame_budget = Duration::from_secs(1) / window_config.target_fps;
    tracing::info!(
        width = window_width,
        height = window_height,
        fps = window_config.target_fps,
        "menu started"
    );

    'running: loop {
        let frame_start = Instant::now();

        // Drain and apply every pending event before drawing this frame.
        if !apply_events(&mut input, &mut ui_state, event_pump.poll_iter()) {
            break 'running;
        }

        canvas.set_draw_color(gui::BACKGROUND);
        canvas.clear();
        gui::render_screen(&mut canvas, &ui_state, config)?;
        canvas.present();

        // Cap framerate
        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    let character = config
        .characters
        .get(ui_state.selected_character())
        .map(|def| def.name.as_str())
        .unwrap_or("?");
    let name = if ui_state.name().is_empty() {
        "<unnamed>"
    } else {
        ui_state.name().as_str()
    };
    tracing::info!(
        screen = ?ui_state.screen(),
        character,
        name,
        volume = ui_state.volume().percent(),
        brightness = ui_state.brightness().percent(),
        "menu closed"
    );

    Ok(())
}

/// Apply a batch of events in order; returns false once a quit is seen
///
/// The context is refreshed per event: a screen change alters how the next
/// key in the same batch reads. Events after a quit are not applied.
fn apply_events(
    input: &mut InputSystem,
    ui_state: &mut UiState,
    events: impl IntoIterator<Item = Event>,
) -> bool {
    for event in events {
        input.update_context(ui_state.screen());
        for action in input.translate(&event) {
            match action {
                InputAction::Quit => return false,
                InputAction::Key(key) => {
                    ui_state.handle(key);
                }
            }
        }
    }
    true
}
