//! Held-key input handler for terminal environments.
//!
//! The game fires one action per frame for every key that is down. Terminals
//! differ in what they report:
//!
//! - With keyboard enhancement, crossterm delivers press and release events,
//!   so a key counts as held from its press until its release.
//! - Plain terminals only deliver presses, repeated by the terminal's own
//!   autorepeat while the key is down. There a key fires on the frame after
//!   each press it receives, so holding it keeps firing at the autorepeat rate
//!   (capped at one action per frame) and a tap fires exactly once.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Logical keys the handler tracks, in per-frame firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldKey {
    Left,
    Right,
    Down,
    Rotate,
}

impl HeldKey {
    pub const ALL: [HeldKey; 4] = [HeldKey::Left, HeldKey::Right, HeldKey::Down, HeldKey::Rotate];

    pub fn from_action(action: GameAction) -> Self {
        match action {
            GameAction::MoveLeft => HeldKey::Left,
            GameAction::MoveRight => HeldKey::Right,
            GameAction::SoftDrop => HeldKey::Down,
            GameAction::Rotate => HeldKey::Rotate,
        }
    }

    pub fn action(&self) -> GameAction {
        match self {
            HeldKey::Left => GameAction::MoveLeft,
            HeldKey::Right => GameAction::MoveRight,
            HeldKey::Down => GameAction::SoftDrop,
            HeldKey::Rotate => GameAction::Rotate,
        }
    }

    fn index(&self) -> usize {
        match self {
            HeldKey::Left => 0,
            HeldKey::Right => 1,
            HeldKey::Down => 2,
            HeldKey::Rotate => 3,
        }
    }
}

/// Tracks which logical keys should fire on the next frame.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    held: [bool; 4],
    pending: [bool; 4],
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: HeldKey) -> bool {
        self.held[key.index()]
    }

    /// Register a key press. Returns the logical key if the code is mapped.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<HeldKey> {
        let key = map_code(code)?;
        self.held[key.index()] = true;
        self.pending[key.index()] = true;
        Some(key)
    }

    /// Register a terminal autorepeat event for a key that is still down.
    pub fn handle_key_repeat(&mut self, code: KeyCode) -> Option<HeldKey> {
        self.handle_key_press(code)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.release_events = true;
        if let Some(key) = map_code(code) {
            self.held[key.index()] = false;
        }
    }

    /// Drop all held and pending keys.
    pub fn reset(&mut self) {
        self.held = [false; 4];
        self.pending = [false; 4];
    }

    /// Actions to apply this frame, at most one per logical key.
    pub fn update(&mut self) -> ArrayVec<GameAction, 4> {
        let mut actions = ArrayVec::<GameAction, 4>::new();

        for key in HeldKey::ALL {
            let i = key.index();
            let fire = self.pending[i] || (self.release_events && self.held[i]);
            self.pending[i] = false;
            if fire {
                actions.push(key.action());
            }
        }

        actions
    }
}

fn map_code(code: KeyCode) -> Option<HeldKey> {
    handle_key_event(code.into()).map(HeldKey::from_action)
}
