//! Keyboard input mapping
//!
//! DOM `KeyboardEvent.key` names are turned into logical actions here so the
//! simulation never sees raw key strings.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::sim::TickInput;

/// Logical game action bound to one or more keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Restart,
}

impl Action {
    /// Map a `KeyboardEvent.key` value to an action (letters case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        match &*normalize(key) {
            "ArrowLeft" | "a" => Some(Action::MoveLeft),
            "ArrowRight" | "d" => Some(Action::MoveRight),
            " " | "ArrowUp" | "w" => Some(Action::Jump),
            "r" => Some(Action::Restart),
            _ => None,
        }
    }
}

/// Keys whose default browser action (page scrolling) must be suppressed
pub fn captures_scroll(key: &str) -> bool {
    matches!(
        key,
        " " | "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight"
    )
}

/// Single letters fold to lowercase; named keys pass through
fn normalize(key: &str) -> Cow<'_, str> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_uppercase() => Cow::Owned(c.to_lowercase().collect()),
        _ => Cow::Borrowed(key),
    }
}

/// Held keys plus the pending one-shot restart
#[derive(Debug, Default)]
pub struct KeyState {
    held: HashSet<String>,
    restart_pending: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        let key = normalize(key);
        if Action::from_key(&key) == Some(Action::Restart) {
            self.restart_pending = true;
        }
        self.held.insert(key.into_owned());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&*normalize(key));
    }

    /// Forget held keys, e.g. when the window loses focus and key-ups are lost
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    fn holding(&self, action: Action) -> bool {
        self.held
            .iter()
            .any(|key| Action::from_key(key) == Some(action))
    }

    /// Inputs for the next tick; consumes a pending restart
    pub fn snapshot(&mut self) -> TickInput {
        TickInput {
            left: self.holding(Action::MoveLeft),
            right: self.holding(Action::MoveRight),
            jump: self.holding(Action::Jump),
            restart: std::mem::take(&mut self.restart_pending),
        }
    }
}
