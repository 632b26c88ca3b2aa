use std::collections::HashSet;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Identifier for a physical keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Named(NamedKey),
    Character(char),
}

/// Non-character keys the viewer binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedKey {
    Space,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    LeftShift,
    RightShift,
    LeftCtrl,
    RightCtrl,
}

/// Something a held key keeps translating every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Eye,
    Target,
}

/// One of the twelve held-key translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Motion {
    pub subject: Subject,
    pub axis: Axis,
    pub positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Motion {
    pub const fn new(subject: Subject, axis: Axis, positive: bool) -> Self {
        Self {
            subject,
            axis,
            positive,
        }
    }

    /// Unit step this motion applies, before scaling by speed.
    pub fn direction(self) -> Vec3 {
        let axis = match self.axis {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        };
        if self.positive {
            axis
        } else {
            -axis
        }
    }
}

/// What a key does when pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Applied every frame while the key is down.
    Hold(Motion),
    /// Fires once, when the key is released.
    NextPreset,
    /// Fires once, when the key is released.
    ToggleShading,
    /// Fires on press.
    Quit,
}

impl Command {
    /// Default key bindings.
    pub fn for_key(key: KeyCode) -> Option<Self> {
        use Axis::*;
        use NamedKey::*;
        use Subject::*;
        let command = match key {
            KeyCode::Character('W') => Self::Hold(Motion::new(Eye, X, false)),
            KeyCode::Character('S') => Self::Hold(Motion::new(Eye, X, true)),
            KeyCode::Character('A') => Self::Hold(Motion::new(Eye, Y, false)),
            KeyCode::Character('D') => Self::Hold(Motion::new(Eye, Y, true)),
            KeyCode::Named(LeftShift) => Self::Hold(Motion::new(Eye, Z, false)),
            KeyCode::Named(LeftCtrl) => Self::Hold(Motion::new(Eye, Z, true)),
            KeyCode::Named(Up) => Self::Hold(Motion::new(Target, X, false)),
            KeyCode::Named(Down) => Self::Hold(Motion::new(Target, X, true)),
            KeyCode::Named(Left) => Self::Hold(Motion::new(Target, Y, false)),
            KeyCode::Named(Right) => Self::Hold(Motion::new(Target, Y, true)),
            KeyCode::Named(RightShift) => Self::Hold(Motion::new(Target, Z, false)),
            KeyCode::Named(RightCtrl) => Self::Hold(Motion::new(Target, Z, true)),
            KeyCode::Named(Space) => Self::NextPreset,
            KeyCode::Named(Tab) => Self::ToggleShading,
            KeyCode::Named(Escape) => Self::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Keyboard state accumulated between frames.
#[derive(Debug, Default)]
pub struct ControlState {
    held: HashSet<Motion>,
    preset_requests: u32,
    shading_toggles: u32,
    quit: bool,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key_down(&mut self, key: KeyCode) {
        match Command::for_key(key) {
            Some(Command::Hold(motion)) => {
                self.held.insert(motion);
            }
            Some(Command::Quit) => self.quit = true,
            _ => {}
        }
    }

    pub fn set_key_up(&mut self, key: KeyCode) {
        match Command::for_key(key) {
            Some(Command::Hold(motion)) => {
                self.held.remove(&motion);
            }
            Some(Command::NextPreset) => self.preset_requests += 1,
            Some(Command::ToggleShading) => self.shading_toggles += 1,
            _ => {}
        }
    }

    pub fn is_held(&self, motion: Motion) -> bool {
        self.held.contains(&motion)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Sum of the unit steps currently held for `subject`.
    pub fn direction(&self, subject: Subject) -> Vec3 {
        self.held
            .iter()
            .filter(|motion| motion.subject == subject)
            .map(|motion| motion.direction())
            .sum()
    }

    /// Returns and clears the number of preset changes requested since the
    /// last call.
    pub fn take_preset_requests(&mut self) -> u32 {
        std::mem::take(&mut self.preset_requests)
    }

    /// Returns and clears the number of shading toggles since the last call.
    pub fn take_shading_toggles(&mut self) -> u32 {
        std::mem::take(&mut self.shading_toggles)
    }
}
