//! Keyboard-modifier state consumed by the wheel adapter.

use crate::events::KeyboardModifiers;

/// Snapshot of the modifier keys relevant to wheel interpretation.
///
/// `pressed_keys` counts every tracked modifier currently held, not just
/// Control and Shift; a count above one marks the combination as ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    /// Control is held (the zoom modifier).
    pub control: bool,
    /// Shift is held (the pan axis-swap modifier).
    pub shift: bool,
    /// Total number of tracked modifier keys held.
    pub pressed_keys: usize,
}

impl From<KeyboardModifiers> for ModifierState {
    fn from(modifiers: KeyboardModifiers) -> Self {
        Self {
            control: modifiers.control,
            shift: modifiers.shift,
            pressed_keys: modifiers.pressed_count(),
        }
    }
}

/// Retains the latest modifier snapshot between platform updates.
#[derive(Debug, Default)]
pub struct ModifierTracker {
    current: ModifierState,
}

impl ModifierTracker {
    /// Creates a tracker with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new modifier snapshot.
    pub fn update(&mut self, modifiers: KeyboardModifiers) {
        self.current = modifiers.into();
    }

    /// The most recent snapshot.
    pub fn state(&self) -> ModifierState {
        self.current
    }
}
