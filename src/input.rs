use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use voxcraft_player::MoveInput;

use crate::config::ConfigError;

/// Logical input action, independent of the physical key that triggers it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
    /// Bound so it can be rebound and tracked; it has no movement effect.
    Crouch,
    Inventory,
    Pause,
    /// Hotbar slot, zero-based.
    Slot(u8),
}

/// Physical key per action. Every field is required when a `[keybindings]`
/// table is given, so a partial table is rejected at load time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    pub jump: String,
    pub crouch: String,
    pub inventory: String,
    pub pause: String,
    pub slot1: String,
    pub slot2: String,
    pub slot3: String,
    pub slot4: String,
    pub slot5: String,
    pub slot6: String,
    pub slot7: String,
    pub slot8: String,
    pub slot9: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".into(),
            backward: "s".into(),
            left: "a".into(),
            right: "d".into(),
            jump: " ".into(),
            crouch: "Shift".into(),
            inventory: "e".into(),
            pause: "Escape".into(),
            slot1: "1".into(),
            slot2: "2".into(),
            slot3: "3".into(),
            slot4: "4".into(),
            slot5: "5".into(),
            slot6: "6".into(),
            slot7: "7".into(),
            slot8: "8".into(),
            slot9: "9".into(),
        }
    }
}

/// Keys compare case-insensitively.
#[inline]
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

impl KeyBindings {
    pub fn entries(&self) -> [(Action, &str); 17] {
        [
            (Action::Forward, &self.forward),
            (Action::Backward, &self.backward),
            (Action::Left, &self.left),
            (Action::Right, &self.right),
            (Action::Jump, &self.jump),
            (Action::Crouch, &self.crouch),
            (Action::Inventory, &self.inventory),
            (Action::Pause, &self.pause),
            (Action::Slot(0), &self.slot1),
            (Action::Slot(1), &self.slot2),
            (Action::Slot(2), &self.slot3),
            (Action::Slot(3), &self.slot4),
            (Action::Slot(4), &self.slot5),
            (Action::Slot(5), &self.slot6),
            (Action::Slot(6), &self.slot7),
            (Action::Slot(7), &self.slot8),
            (Action::Slot(8), &self.slot9),
        ]
    }

    pub fn action_for(&self, key: &str) -> Option<Action> {
        let key = normalize_key(key);
        self.entries()
            .into_iter()
            .find(|(_, k)| normalize_key(k) == key)
            .map(|(a, _)| a)
    }

    /// Rejects empty keys and a physical key bound to two actions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashSet<String> = HashSet::new();
        for (action, key) in self.entries() {
            if key.is_empty() {
                return Err(ConfigError::UnboundAction(action));
            }
            if !seen.insert(normalize_key(key)) {
                return Err(ConfigError::DuplicateKey(key.to_string()));
            }
        }
        Ok(())
    }
}

/// Held actions and pointer motion written by input events and read once per
/// tick through [`InputState::snapshot`].
#[derive(Clone, Debug, Default)]
pub struct InputState {
    held: HashSet<Action>,
    look_dx: f32,
    look_dy: f32,
}

impl InputState {
    pub fn press(&mut self, action: Action) -> bool {
        self.held.insert(action)
    }

    pub fn release(&mut self, action: Action) -> bool {
        self.held.remove(&action)
    }

    #[inline]
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn add_look(&mut self, dx: f32, dy: f32) {
        if dx.is_finite() && dy.is_finite() {
            self.look_dx += dx;
            self.look_dy += dy;
        }
    }

    /// Drop pointer motion gathered so far (capture lost).
    pub fn discard_look(&mut self) {
        self.look_dx = 0.0;
        self.look_dy = 0.0;
    }

    pub fn release_all(&mut self) {
        self.held.clear();
        self.discard_look();
    }

    /// Consistent view of this tick's input. Consumes the pointer motion.
    pub fn snapshot(&mut self) -> MoveInput {
        let snap = MoveInput {
            forward: self.is_held(Action::Forward),
            backward: self.is_held(Action::Backward),
            left: self.is_held(Action::Left),
            right: self.is_held(Action::Right),
            jump: self.is_held(Action::Jump),
            look_dx: self.look_dx,
            look_dy: self.look_dy,
        };
        self.discard_look();
        snap
    }
}
