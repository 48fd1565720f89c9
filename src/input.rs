use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::KeyCode;

use crate::grid::Direction;
use crate::screen::Input;

pub fn binding(key: KeyCode) -> Option<Input> {
    let input = match key {
        KeyCode::Enter | KeyCode::KpEnter => Input::Confirm,
        KeyCode::Escape => Input::Cancel,
        KeyCode::Q => Input::Quit,
        KeyCode::H => Input::ShowScores,
        KeyCode::Up | KeyCode::W => Input::Steer(Direction::Up),
        KeyCode::Down | KeyCode::S => Input::Steer(Direction::Down),
        KeyCode::Left | KeyCode::A => Input::Steer(Direction::Left),
        KeyCode::Right | KeyCode::D => Input::Steer(Direction::Right),
        _ => return None,
    };
    Some(input)
}

/// Key presses in the order the window delivered them.
pub struct KeyQueue {
    subscriber: usize,
    pending: Vec<Input>,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self {
            subscriber: register_input_subscriber(),
            pending: Vec::new(),
        }
    }

    /// Everything pressed since the previous call, oldest first.
    pub fn drain(&mut self) -> Vec<Input> {
        let subscriber = self.subscriber;
        repeat_all_miniquad_input(self, subscriber);
        std::mem::take(&mut self.pending)
    }

    fn push_key(&mut self, key: KeyCode, repeat: bool) {
        if repeat {
            return;
        }
        if let Some(input) = binding(key) {
            self.pending.push(input);
        }
    }
}

impl Default for KeyQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for KeyQueue {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        self.push_key(keycode, repeat);
    }
}
