//! Screen State Machine
//!
//! `UiState` owns the current screen and every piece of per-screen interactive
//! state. `UiState::handle` applies one key event using a flat match on the
//! current screen.
//!
//! # Persistence across visits
//!
//! Nothing is reset when a screen is re-entered: title/settings focus, slider
//! values, the selected character and the typed name all carry over until the
//! process exits.
//!
//! # Transitions
//!
//! ```text
//! Title --Confirm(Start)--> CharacterSelect --Confirm--> NameEntry --Confirm--> Placeholder
//! Title --Confirm(Credits)--> Credits --Confirm--> Title
//! Title --Confirm(Settings)--> Settings --Confirm--> Title
//! ```
//!
//! Placeholder has no outgoing transitions.

use crate::config::UiConfig;
use crate::focus::FocusCycle;
use crate::input_system::KeyEvent;
use crate::name_buffer::NameBuffer;
use crate::slider::SliderModel;
use crate::text;

/// UI screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Settings,
    Credits,
    CharacterSelect,
    NameEntry,
    Placeholder,
}

/// Focusable elements on the title screen, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleItem {
    Start,
    Credits,
    Settings,
}

impl TitleItem {
    pub const COUNT: usize = 3;

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => TitleItem::Start,
            1 => TitleItem::Credits,
            _ => TitleItem::Settings,
        }
    }

    /// Screen entered when this item is confirmed
    pub fn target(self) -> Screen {
        match self {
            TitleItem::Start => Screen::CharacterSelect,
            TitleItem::Credits => Screen::Credits,
            TitleItem::Settings => Screen::Settings,
        }
    }
}

/// Focusable sliders on the settings screen, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    Volume,
    Brightness,
}

impl SettingsItem {
    pub const COUNT: usize = 2;

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => SettingsItem::Volume,
            _ => SettingsItem::Brightness,
        }
    }
}

/// A screen change produced by one key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

/// All interactive UI state for the running program
///
/// There is one instance, owned by the main loop and passed explicitly. The
/// renderer only ever borrows it immutably.
#[derive(Debug, Clone)]
pub struct UiState {
    screen: Screen,
    title_focus: FocusCycle,
    settings_focus: FocusCycle,
    volume: SliderModel,
    brightness: SliderModel,
    selected_character: FocusCycle,
    name: NameBuffer,
}

impl UiState {
    /// Creates the initial state: Title screen, every focus at index 0
    ///
    /// Character selection cycles over the configured catalog.
    pub fn new(config: &UiConfig) -> Self {
        UiState {
            screen: Screen::Title,
            title_focus: FocusCycle::new(TitleItem::COUNT),
            settings_focus: FocusCycle::new(SettingsItem::COUNT),
            volume: SliderModel::new(config.volume.initial, config.volume.step),
            brightness: SliderModel::new(config.brightness.initial, config.brightness.step),
            selected_character: FocusCycle::new(config.characters.len()),
            name: NameBuffer::with_capacity(config.max_name_len),
        }
    }

    /// Applies one key event to the current screen.
    ///
    /// Keys with no meaning on the current screen are ignored. Returns the
    /// transition if the screen changed.
    pub fn handle(&mut self, event: KeyEvent) -> Option<Transition> {
        let from = self.screen;

        match self.screen {
            Screen::Title => match event {
                KeyEvent::Up | KeyEvent::Left => self.title_focus.previous(),
                KeyEvent::Down | KeyEvent::Right => self.title_focus.next(),
                KeyEvent::Confirm => self.screen = self.title_item().target(),
                _ => {}
            },

            Screen::Settings => match event {
                KeyEvent::Up => self.settings_focus.previous(),
                KeyEvent::Down => self.settings_focus.next(),
                KeyEvent::Left | KeyEvent::Right => {
                    let item = self.settings_item();
                    let slider = self.focused_slider_mut();
                    if event == KeyEvent::Left {
                        slider.decrease();
                    } else {
                        slider.increase();
                    }
                    tracing::debug!(?item, value = slider.value(), "slider adjusted");
                }
                KeyEvent::Confirm => self.screen = Screen::Title,
                _ => {}
            },

            Screen::Credits => {
                if event == KeyEvent::Confirm {
                    self.screen = Screen::Title;
                }
            }

            Screen::CharacterSelect => match event {
                KeyEvent::Left => self.selected_character.previous(),
                KeyEvent::Right => self.selected_character.next(),
                KeyEvent::Confirm => self.screen = Screen::NameEntry,
                _ => {}
            },

            Screen::NameEntry => match event {
                KeyEvent::Confirm => self.screen = Screen::Placeholder,
                KeyEvent::Backspace => self.name.backspace(),
                KeyEvent::Char(ch) => {
                    // Only characters the bitmap font can draw
                    if !text::has_glyph(ch) || !self.name.append(ch) {
                        tracing::trace!(?ch, len = self.name.len(), "name character dropped");
                    }
                }
                _ => {}
            },

            // Unfinished stub: nothing leads out of here yet.
            Screen::Placeholder => {}
        }

        if self.screen != from {
            let transition = Transition {
                from,
                to: self.screen,
            };
            tracing::debug!(from = ?transition.from, to = ?transition.to, "screen transition");
            Some(transition)
        } else {
            None
        }
    }

    fn focused_slider_mut(&mut self) -> &mut SliderModel {
        match SettingsItem::from_index(self.settings_focus.index()) {
            SettingsItem::Volume => &mut self.volume,
            SettingsItem::Brightness => &mut self.brightness,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn title_item(&self) -> TitleItem {
        TitleItem::from_index(self.title_focus.index())
    }

    pub fn settings_item(&self) -> SettingsItem {
        SettingsItem::from_index(self.settings_focus.index())
    }

    pub fn volume(&self) -> &SliderModel {
        &self.volume
    }

    pub fn brightness(&self) -> &SliderModel {
        &self.brightness
    }

    /// Index into the character catalog
    pub fn selected_character(&self) -> usize {
        self.selected_character.index()
    }

    pub fn name(&self) -> &NameBuffer {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn new_state() -> UiState {
        UiState::new(&UiConfig::default())
    }

    fn press(state: &mut UiState, keys: &[KeyEvent]) {
        for &key in keys {
            state.handle(key);
        }
    }

    fn type_text(state: &mut UiState, text: &str) {
        for ch in text.chars() {
            state.handle(KeyEvent::Char(ch));
        }
    }

    /// Title -> CharacterSelect -> NameEntry
    fn at_name_entry() -> UiState {
        let mut state = new_state();
        press(&mut state, &[KeyEvent::Confirm, KeyEvent::Confirm]);
        assert_eq!(state.screen(), Screen::NameEntry);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = new_state();
        assert_eq!(state.screen(), Screen::Title);
        assert_eq!(state.title_item(), TitleItem::Start);
        assert_eq!(state.settings_item(), SettingsItem::Volume);
        assert_eq!(state.selected_character(), 0);
        assert!(state.name().is_empty());
        assert!((state.volume().value() - 0.7).abs() < EPS);
        assert!((state.brightness().value() - 0.6).abs() < EPS);
    }

    #[test]
    fn test_title_confirm_start_goes_to_character_select() {
        let mut state = new_state();
        let transition = state.handle(KeyEvent::Confirm);
        assert_eq!(state.screen(), Screen::CharacterSelect);
        assert_eq!(
            transition,
            Some(Transition {
                from: Screen::Title,
                to: Screen::CharacterSelect
            })
        );
    }

    #[test]
    fn test_title_left_wraps_backward() {
        let mut state = new_state();
        let mut seen = Vec::new();
        for _ in 0..3 {
            state.handle(KeyEvent::Left);
            seen.push(state.title_focus.index());
        }
        assert_eq!(seen, vec![2, 1, 0]);
    }

    #[test]
    fn test_title_up_and_down_move_focus() {
        let mut state = new_state();
        state.handle(KeyEvent::Down);
        assert_eq!(state.title_item(), TitleItem::Credits);
        state.handle(KeyEvent::Right);
        assert_eq!(state.title_item(), TitleItem::Settings);
        state.handle(KeyEvent::Up);
        assert_eq!(state.title_item(), TitleItem::Credits);
    }

    #[test]
    fn test_title_confirm_targets() {
        let mut state = new_state();
        press(&mut state, &[KeyEvent::Down, KeyEvent::Confirm]);
        assert_eq!(state.screen(), Screen::Credits);

        let mut state = new_state();
        press(&mut state, &[KeyEvent::Up, KeyEvent::Confirm]);
        assert_eq!(state.screen(), Screen::Settings);
    }

    #[test]
    fn test_title_ignores_text_and_backspace() {
        let mut state = new_state();
        assert_eq!(state.handle(KeyEvent::Char('x')), None);
        assert_eq!(state.handle(KeyEvent::Backspace), None);
        assert_eq!(state.screen(), Screen::Title);
        assert_eq!(state.title_focus.index(), 0);
    }

    #[test]
    fn test_settings_adjusts_focused_slider() {
        let mut state = new_state();
        press(&mut state, &[KeyEvent::Up, KeyEvent::Confirm]);
        assert_eq!(state.screen(), Screen::Settings);

        state.handle(KeyEvent::Right);
        assert!((state.volume().value() - 0.75).abs() < EPS);

        press(&mut state, &[KeyEvent::Left, KeyEvent::Left, KeyEvent::Left]);
        assert!((state.volume().value() - 0.6).abs() < EPS);
        assert!((state.brightness().value() - 0.6).abs() < EPS);
    }

    #[test]
    fn test_settings_focus_switches_slider() {
        let mut state = new_state();
        press(&mut state, &[KeyEvent::Up, KeyEvent::Confirm, KeyEvent::Down]);
        assert_eq!(state.settings_item(), SettingsItem::Brightness);

        state.handle(KeyEvent::Right);
        assert!((state.brightness().value() - 0.65).abs() < EPS);
        assert!((state.volume().value() - 0.7).abs() < EPS);

        // Only two sliders, so Up from either one lands on the other
        state.handle(KeyEvent::Up);
        assert_eq!(state.settings_item(), SettingsItem::Volume);
        state.handle(KeyEvent::Up);
        assert_eq!(state.settings_item(), SettingsItem::Brightness);
    }

    #[test]
    fn test_settings_slider_saturates() {
        let mut state = new_state();
        press(&mut state, &[KeyEvent::Up, KeyEvent::Confirm]);
        for _ in 0..40 {
            state.handle(KeyEvent::Right);
        }
        assert_eq!(state.volume().value(), 1.0);
        for _ in 0..40 {
            state.handle(KeyEvent::Left);
        }
        assert_eq!(state.volume().value(), 0.0);
    }

    #[test]
    fn test_settings_state_persists_across_visits() {
        let mut state = new_state();
        press(
            &mut state,
            &[KeyEvent::Up, KeyEvent::Confirm, KeyEvent::Down, KeyEvent::Right],
        );
        state.handle(KeyEvent::Confirm);
        assert_eq!(state.screen(), Screen::Title);
        // Title focus stayed on Settings
        assert_eq!(state.title_item(), TitleItem::Settings);

        state.handle(KeyEvent::Confirm);
        assert_eq!(state.screen(), Screen::Settings);
        assert_eq!(state.settings_item(), SettingsItem::Brightness);
        assert!((state.brightness().value() - 0.65).abs() < EPS);
    }

    #[test]
    fn test_credits_only_confirm_returns() {
        let mut state = new_state();
        press(&mut state, &[KeyEvent::Down, KeyEvent::Confirm]);
        for key in [
            KeyEvent::Up,
            KeyEvent::Down,
            KeyEvent::Left,
            KeyEvent::Right,
            KeyEvent::Backspace,
            KeyEvent::Char('q'),
        ] {
            assert_eq!(state.handle(key), None);
            assert_eq!(state.screen(), Screen::Credits);
        }
        state.handle(KeyEvent::Confirm);
        assert_eq!(state.screen(), Screen::Title);
    }

    #[test]
    fn test_character_select_wraps() {
        let mut state = new_state();
        state.handle(KeyEvent::Confirm);
        state.handle(KeyEvent::Left);
        assert_eq!(state.selected_character(), 2);
        state.handle(KeyEvent::Right);
        assert_eq!(state.selected_character(), 0);
        state.handle(KeyEvent::Right);
        assert_eq!(state.selected_character(), 1);
    }

    #[test]
    fn test_character_select_ignores_vertical() {
        let mut state = new_state();
        press(&mut state, &[KeyEvent::Confirm, KeyEvent::Up, KeyEvent::Down]);
        assert_eq!(state.selected_character(), 0);
        assert_eq!(state.screen(), Screen::CharacterSelect);
    }

    #[test]
    fn test_character_select_single_entry_catalog() {
        let mut config = UiConfig::default();
        config.characters.truncate(1);
        let mut state = UiState::new(&config);
        press(&mut state, &[KeyEvent::Confirm, KeyEvent::Left, KeyEvent::Right]);
        assert_eq!(state.selected_character(), 0);
    }

    #[test]
    fn test_name_entry_typing_and_backspace() {
        let mut state = at_name_entry();
        type_text(&mut state, "AB");
        state.handle(KeyEvent::Backspace);
        type_text(&mut state, "C");
        assert_eq!(state.name().as_str(), "AC");
    }

    #[test]
    fn test_name_entry_drops_characters_without_glyph() {
        let mut state = at_name_entry();
        type_text(&mut state, "Zoé~");
        assert_eq!(state.name().as_str(), "Zo~");
    }

    #[test]
    fn test_name_entry_ignores_directions() {
        let mut state = at_name_entry();
        press(
            &mut state,
            &[KeyEvent::Up, KeyEvent::Down, KeyEvent::Left, KeyEvent::Right],
        );
        assert!(state.name().is_empty());
        assert_eq!(state.screen(), Screen::NameEntry);
    }

    #[test]
    fn test_name_entry_caps_length() {
        let mut state = at_name_entry();
        type_text(&mut state, "ABCDEFGHIJKLMNOPQRST");
        assert_eq!(state.name().as_str(), "ABCDEFGHIJKLMNOP");
        assert_eq!(state.name().len(), 16);
    }

    #[test]
    fn test_name_entry_confirm_with_empty_name() {
        let mut state = at_name_entry();
        state.handle(KeyEvent::Confirm);
        assert_eq!(state.screen(), Screen::Placeholder);
        assert!(state.name().is_empty());
    }

    #[test]
    fn test_placeholder_has_no_transitions() {
        let mut state = at_name_entry();
        type_text(&mut state, "Hero");
        state.handle(KeyEvent::Confirm);
        for key in [
            KeyEvent::Confirm,
            KeyEvent::Up,
            KeyEvent::Left,
            KeyEvent::Backspace,
            KeyEvent::Char('z'),
        ] {
            assert_eq!(state.handle(key), None);
        }
        assert_eq!(state.screen(), Screen::Placeholder);
        assert_eq!(state.name().as_str(), "Hero");
    }

    #[test]
    fn test_selection_and_name_carry_forward() {
        let mut state = new_state();
        press(&mut state, &[KeyEvent::Confirm, KeyEvent::Right, KeyEvent::Confirm]);
        type_text(&mut state, "Ash");
        state.handle(KeyEvent::Confirm);
        assert_eq!(state.selected_character(), 1);
        assert_eq!(state.name().as_str(), "Ash");
    }
}
