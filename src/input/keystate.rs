//! Held-key tracking for terminal environments.
//!
//! The core samples a level-triggered [`InputState`] once per tick, so this
//! tracker's job is to know which directions are currently held. Terminals
//! that support the keyboard enhancement protocol deliver real release
//! events; for the rest, a per-direction timeout auto-releases keys a short
//! while after their last press (terminal auto-repeat keeps refreshing the
//! timestamp while a key is physically held).

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::input::map::{direction_for_key, Direction};
use crate::types::InputState;

// Without release events, a single tap must not read as held forever.
const DEFAULT_HOLD_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    held: bool,
    last_press: Instant,
}

impl HeldKey {
    fn new() -> Self {
        Self {
            held: false,
            last_press: Instant::now(),
        }
    }
}

/// Tracks which directions are held, producing per-tick input snapshots
#[derive(Debug, Clone)]
pub struct KeyState {
    left: HeldKey,
    right: HeldKey,
    soft_drop: HeldKey,
    rotate: HeldKey,
    hold_timeout_ms: u32,
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            left: HeldKey::new(),
            right: HeldKey::new(),
            soft_drop: HeldKey::new(),
            rotate: HeldKey::new(),
            hold_timeout_ms: DEFAULT_HOLD_TIMEOUT_MS,
        }
    }

    pub fn with_hold_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.hold_timeout_ms = timeout_ms;
        self
    }

    fn slot(&mut self, direction: Direction) -> &mut HeldKey {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::SoftDrop => &mut self.soft_drop,
            Direction::Rotate => &mut self.rotate,
        }
    }

    /// Record a key press (or terminal auto-repeat)
    pub fn handle_key_press(&mut self, code: KeyCode) {
        if let Some(direction) = direction_for_key(code) {
            let slot = self.slot(direction);
            slot.held = true;
            slot.last_press = Instant::now();
        }
    }

    /// Record a key release
    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(direction) = direction_for_key(code) {
            self.slot(direction).held = false;
        }
    }

    /// Release everything (used when the game pauses)
    pub fn reset(&mut self) {
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::SoftDrop,
            Direction::Rotate,
        ] {
            self.slot(direction).held = false;
        }
    }

    fn is_held(&self, key: &HeldKey, now: Instant) -> bool {
        if !key.held {
            return false;
        }
        let elapsed = now.duration_since(key.last_press).as_millis() as u32;
        elapsed <= self.hold_timeout_ms
    }

    /// Sample the current held set into an immutable per-tick snapshot
    pub fn sample(&mut self) -> InputState {
        let now = Instant::now();
        let snapshot = InputState {
            left: self.is_held(&self.left, now),
            right: self.is_held(&self.right, now),
            soft_drop: self.is_held(&self.soft_drop, now),
            rotate: self.is_held(&self.rotate, now),
        };

        // Drop stale holds so a later release event cannot resurrect them
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::SoftDrop,
            Direction::Rotate,
        ] {
            let timeout = self.hold_timeout_ms;
            let slot = self.slot(direction);
            if slot.held && now.duration_since(slot.last_press).as_millis() as u32 > timeout {
                slot.held = false;
            }
        }

        snapshot
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}
