use bevy::prelude::*;
use std::collections::HashMap;

use crate::gameplay::cat::CatDirection;

/// Named actions a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
}

impl Action {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Up" => Some(Self::Up),
            "Down" => Some(Self::Down),
            _ => None,
        }
    }

    pub fn direction(self) -> CatDirection {
        match self {
            Self::Up => CatDirection::Up,
            Self::Down => CatDirection::Down,
        }
    }
}

/// Physical key -> action table. Keys not in the table are ignored.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub keys: HashMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = HashMap::from([
            (KeyCode::ArrowUp, Action::Up),
            (KeyCode::KeyW, Action::Up),
            (KeyCode::ArrowDown, Action::Down),
            (KeyCode::KeyS, Action::Down),
        ]);
        Self { keys }
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: KeyCode, action: Action) -> Option<Action> {
        self.keys.insert(key, action)
    }

    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.keys.get(&key).copied()
    }

    pub fn direction_for(&self, key: KeyCode) -> Option<CatDirection> {
        self.action_for(key).map(Action::direction)
    }
}
