use crate::basic::Dir;
use ggez::input::keyboard::KeyCode::{self, *};

/// What a key press asks the game to do
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Turn(Dir),
    Restart,
    Quit,
}

#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

impl Controls {
    pub const ARROWS: Self = Self { u: Up, d: Down, l: Left, r: Right };
    pub const WASD: Self = Self { u: W, d: S, l: A, r: D };

    fn dir(&self, key: KeyCode) -> Option<Dir> {
        match key {
            k if k == self.u => Some(Dir::U),
            k if k == self.d => Some(Dir::D),
            k if k == self.l => Some(Dir::L),
            k if k == self.r => Some(Dir::R),
            _ => None,
        }
    }
}

pub struct KeyMap {
    pub movement: Vec<Controls>,
    pub restart: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            movement: vec![Controls::ARROWS, Controls::WASD],
            restart: vec![R, Space],
            quit: vec![Escape],
        }
    }
}

impl KeyMap {
    pub fn command(&self, key: KeyCode) -> Option<Command> {
        if let Some(dir) = self.movement.iter().find_map(|controls| controls.dir(key)) {
            return Some(Command::Turn(dir));
        }
        if self.restart.contains(&key) {
            return Some(Command::Restart);
        }
        if self.quit.contains(&key) {
            return Some(Command::Quit);
        }
        None
    }
}

#[test]
fn test_default_bindings() {
    let key_map = KeyMap::default();
    [
        (Up, Some(Command::Turn(Dir::U))),
        (Down, Some(Command::Turn(Dir::D))),
        (Left, Some(Command::Turn(Dir::L))),
        (Right, Some(Command::Turn(Dir::R))),
        (W, Some(Command::Turn(Dir::U))),
        (A, Some(Command::Turn(Dir::L))),
        (S, Some(Command::Turn(Dir::D))),
        (D, Some(Command::Turn(Dir::R))),
        (R, Some(Command::Restart)),
        (Space, Some(Command::Restart)),
        (Escape, Some(Command::Quit)),
        (X, None),
        (Return, None),
    ]
    .iter()
    .for_each(|&(key, expect)| {
        assert_eq!(key_map.command(key), expect, "{key:?}");
    });
}
