use crate::screen::Screen;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Discrete key presses the screen state machine understands
///
/// Everything the menus react to arrives as one of these. Key releases and
/// auto-repeat never produce an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Backspace,
    /// A printable character (only meaningful on the name entry screen)
    Char(char),
}

/// What the main loop should do with one SDL2 event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Key(KeyEvent),
    Quit,
}

/// Input context determines how letter keys are read
///
/// W/A/S/D double as direction keys everywhere except the name entry screen,
/// where they type their letter like any other printable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Menu screens: W/A/S/D steer focus
    Navigation,
    /// Name entry: text input events type characters
    TextEntry,
}

impl InputContext {
    pub fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::NameEntry => InputContext::TextEntry,
            _ => InputContext::Navigation,
        }
    }
}

/// InputSystem translates SDL2 events into `InputAction`s
///
/// # Architecture
///
/// Key-down events carry the keys the menus steer with (arrows, W/A/S/D,
/// Space, Backspace). Typed characters come from SDL2 text input events, which
/// hold the character the keyboard layout actually produced (Shift+1 is `!`).
/// SDL2 delivers a key's text event right after its key-down, so text input
/// stays enabled on every screen and is simply ignored outside name entry.
///
/// The main loop refreshes the context before translating *each* event, not
/// once per frame. A Confirm that enters name entry must change how the very
/// next queued key is read.
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
    /// The last key-down was an auto-repeat, so its text is dropped too
    repeating: bool,
}

impl InputSystem {
    /// Creates a new InputSystem in Navigation context (title screen)
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Navigation,
            repeating: false,
        }
    }

    /// Update the input context from the screen currently shown
    pub fn update_context(&mut self, screen: Screen) {
        self.context = InputContext::for_screen(screen);
    }

    /// Translate one SDL2 event; empty for anything the menus ignore
    ///
    /// A text input event can carry several characters (IME commits), so one
    /// event may produce more than one action.
    pub fn translate(&mut self, event: &Event) -> Vec<InputAction> {
        match event {
            Event::Quit { .. } => vec![InputAction::Quit],
            Event::KeyDown {
                keycode, repeat, ..
            } => {
                self.repeating = *repeat;
                if *repeat {
                    return Vec::new();
                }
                keycode
                    .and_then(|key| self.translate_keydown(key))
                    .map(InputAction::Key)
                    .into_iter()
                    .collect()
            }
            Event::TextInput { text, .. } => self.translate_text(text),
            _ => {
                // Key-up, mouse, window events
                Vec::new()
            }
        }
    }

    /// Translate a key press in the current context
    pub fn translate_keydown(&self, key: Keycode) -> Option<KeyEvent> {
        match key {
            Keycode::Space => Some(KeyEvent::Confirm),
            Keycode::Backspace => Some(KeyEvent::Backspace),
            Keycode::Up => Some(KeyEvent::Up),
            Keycode::Down => Some(KeyEvent::Down),
            Keycode::Left => Some(KeyEvent::Left),
            Keycode::Right => Some(KeyEvent::Right),
            Keycode::W if self.context == InputContext::Navigation => Some(KeyEvent::Up),
            Keycode::S if self.context == InputContext::Navigation => Some(KeyEvent::Down),
            Keycode::A if self.context == InputContext::Navigation => Some(KeyEvent::Left),
            Keycode::D if self.context == InputContext::Navigation => Some(KeyEvent::Right),
            _ => None,
        }
    }

    /// Characters typed by one text input event
    ///
    /// Only name entry takes text. Space is always Confirm, so its text is
    /// dropped, as is the text of an auto-repeated key.
    pub fn translate_text(&self, text: &str) -> Vec<InputAction> {
        if self.context != InputContext::TextEntry || self.repeating {
            return Vec::new();
        }
        text.chars()
            .filter(|&ch| ch != ' ')
            .map(|ch| InputAction::Key(KeyEvent::Char(ch)))
            .collect()
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn keydown(key: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    fn text_input(text: &str) -> Event {
        Event::TextInput {
            timestamp: 0,
            window_id: 0,
            text: text.to_string(),
        }
    }

    fn typed(chars: &str) -> Vec<InputAction> {
        chars
            .chars()
            .map(|ch| InputAction::Key(KeyEvent::Char(ch)))
            .collect()
    }

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Navigation);
    }

    #[test]
    fn test_context_follows_screen() {
        let mut input = InputSystem::new();
        input.update_context(Screen::NameEntry);
        assert_eq!(input.context, InputContext::TextEntry);
        input.update_context(Screen::CharacterSelect);
        assert_eq!(input.context, InputContext::Navigation);
        input.update_context(Screen::Placeholder);
        assert_eq!(input.context, InputContext::Navigation);
    }

    #[test]
    fn test_wasd_are_directions_in_navigation() {
        let input = InputSystem::new();
        assert_eq!(input.translate_keydown(Keycode::W), Some(KeyEvent::Up));
        assert_eq!(input.translate_keydown(Keycode::S), Some(KeyEvent::Down));
        assert_eq!(input.translate_keydown(Keycode::A), Some(KeyEvent::Left));
        assert_eq!(input.translate_keydown(Keycode::D), Some(KeyEvent::Right));
        assert_eq!(input.translate_keydown(Keycode::Q), None);
    }

    #[test]
    fn test_wasd_key_downs_are_silent_in_text_entry() {
        let mut input = InputSystem::new();
        input.update_context(Screen::NameEntry);
        assert_eq!(input.translate_keydown(Keycode::W), None);
        assert_eq!(input.translate_keydown(Keycode::A), None);
        // Arrow keys stay directional
        assert_eq!(input.translate_keydown(Keycode::Left), Some(KeyEvent::Left));
    }

    #[test]
    fn test_space_and_backspace_in_every_context() {
        let mut input = InputSystem::new();
        for screen in [Screen::Title, Screen::NameEntry] {
            input.update_context(screen);
            assert_eq!(input.translate_keydown(Keycode::Space), Some(KeyEvent::Confirm));
            assert_eq!(input.translate_keydown(Keycode::Backspace), Some(KeyEvent::Backspace));
        }
    }

    #[test]
    fn test_text_input_uses_layout_character() {
        let mut input = InputSystem::new();
        input.update_context(Screen::NameEntry);
        // Shift+1 and Shift+- as resolved by the keyboard layout
        assert_eq!(input.translate(&text_input("!")), typed("!"));
        assert_eq!(input.translate(&text_input("_")), typed("_"));
        assert_eq!(input.translate(&text_input("W")), typed("W"));
    }

    #[test]
    fn test_text_input_skips_space() {
        let mut input = InputSystem::new();
        input.update_context(Screen::NameEntry);
        assert_eq!(input.translate(&text_input(" ")), Vec::new());
        assert_eq!(input.translate(&text_input("a b")), typed("ab"));
    }

    #[test]
    fn test_text_input_ignored_while_navigating() {
        let mut input = InputSystem::new();
        assert_eq!(input.translate(&text_input("w")), Vec::new());
    }

    #[test]
    fn test_repeated_key_text_is_dropped() {
        let mut input = InputSystem::new();
        input.update_context(Screen::NameEntry);
        assert_eq!(input.translate(&keydown(Keycode::Q, false)), Vec::new());
        assert_eq!(input.translate(&text_input("q")), typed("q"));

        assert_eq!(input.translate(&keydown(Keycode::Q, true)), Vec::new());
        assert_eq!(input.translate(&text_input("q")), Vec::new());

        // A fresh press types again
        input.translate(&keydown(Keycode::E, false));
        assert_eq!(input.translate(&text_input("e")), typed("e"));
    }

    #[test]
    fn test_translate_ignores_repeats_and_releases() {
        let mut input = InputSystem::new();
        assert_eq!(
            input.translate(&keydown(Keycode::D, false)),
            vec![InputAction::Key(KeyEvent::Right)]
        );
        assert_eq!(input.translate(&keydown(Keycode::D, true)), Vec::new());

        let release = Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::D),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(input.translate(&release), Vec::new());
    }

    #[test]
    fn test_quit_event() {
        let mut input = InputSystem::new();
        assert_eq!(input.translate(&Event::Quit { timestamp: 0 }), vec![InputAction::Quit]);
    }
}
