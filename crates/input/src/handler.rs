//! Held-button tracker for terminal environments.
//!
//! The game wants the button held during each frame, while terminals deliver
//! discrete key events and often no release events at all. A key counts as
//! held until its release arrives, another key is pressed, or no event for it
//! has been seen for `key_release_timeout_frames` frames.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::button_for_key;
use crate::types::Button;

// Roughly 150ms at 60 Hz: long enough to bridge OS auto-repeat events,
// short enough that a tap does not reach the 30-frame repeat delay.
const DEFAULT_KEY_RELEASE_TIMEOUT_FRAMES: u32 = 9;

/// Tracks which button is currently held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Button,
    frames_since_key: u32,
    key_release_timeout_frames: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: Button::None,
            frames_since_key: 0,
            key_release_timeout_frames: DEFAULT_KEY_RELEASE_TIMEOUT_FRAMES,
        }
    }

    pub fn with_key_release_timeout_frames(mut self, frames: u32) -> Self {
        self.key_release_timeout_frames = frames.max(1);
        self
    }

    pub fn key_release_timeout_frames(&self) -> u32 {
        self.key_release_timeout_frames
    }

    /// Button currently considered held
    pub fn held(&self) -> Button {
        self.held
    }

    /// Feed one terminal key event; returns the mapped button, if any
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Button> {
        let button = button_for_key(key)?;
        match key.kind {
            KeyEventKind::Release => self.handle_release(button),
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_press(button),
        }
        Some(button)
    }

    pub fn handle_press(&mut self, button: Button) {
        self.held = button;
        self.frames_since_key = 0;
    }

    pub fn handle_release(&mut self, button: Button) {
        if self.held == button {
            self.release();
        }
    }

    pub fn release(&mut self) {
        self.held = Button::None;
        self.frames_since_key = 0;
    }

    /// Button to feed the game for this frame
    pub fn next_frame(&mut self) -> Button {
        if self.held.is_pressed() && self.frames_since_key >= self.key_release_timeout_frames {
            self.release();
        }
        self.frames_since_key = self.frames_since_key.saturating_add(1);
        self.held
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
