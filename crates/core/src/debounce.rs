//! Per-frame button debounce.
//!
//! The caller reports the raw button every frame. `ButtonState` remembers the
//! last button it acted on and how many frames it has been held, and decides
//! whether this frame should trigger an action under one of three policies.

use crate::types::{Button, REPEAT_DELAY_FRAMES, REPEAT_INTERVAL_FRAMES};

/// How a held button turns into repeated actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// Fire once per press
    OneShot,
    /// Fire on press, then after `REPEAT_DELAY_FRAMES`, then every `REPEAT_INTERVAL_FRAMES`
    RepeatAfterDelay,
    /// Fire on press, then every `REPEAT_INTERVAL_FRAMES`
    Repeat,
}

/// Last acted-on button plus its held-frame counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    current: Button,
    held_frames: u32,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Button {
        self.current
    }

    /// Frames the current button has been held past its first trigger
    pub fn held_frames(&self) -> u32 {
        self.held_frames
    }

    /// Note `button` as the current one without deciding anything
    ///
    /// A change of button restarts the held counter.
    pub fn record(&mut self, button: Button) {
        if self.current != button {
            self.press(button);
        }
    }

    fn press(&mut self, button: Button) {
        self.current = button;
        self.held_frames = 0;
    }

    /// Whether `button` should act this frame under `policy`
    pub fn should_act(&mut self, button: Button, policy: RepeatPolicy) -> bool {
        if self.current != button {
            self.press(button);
            return true;
        }

        match policy {
            RepeatPolicy::OneShot => false,
            RepeatPolicy::RepeatAfterDelay => {
                self.held_frames = self.held_frames.saturating_add(1);
                self.held_frames >= REPEAT_DELAY_FRAMES
                    && (self.held_frames - REPEAT_DELAY_FRAMES) % REPEAT_INTERVAL_FRAMES == 0
            }
            RepeatPolicy::Repeat => {
                self.held_frames = self.held_frames.saturating_add(1);
                self.held_frames % REPEAT_INTERVAL_FRAMES == 0
            }
        }
    }
}
