//! Game state module - the aggregate root and its per-frame tick
//!
//! This module ties together all core components: board, pieces, bag, scoring
//! and button debounce. The caller owns one [`GameState`] and feeds it exactly
//! one [`Button`] per frame through [`GameState::tick`], which returns a
//! [`Changes`] mask describing what needs redrawing.

use tracing::{debug, trace};

use crate::board::Board;
use crate::debounce::{ButtonState, RepeatPolicy};
use crate::pieces::Piece;
use crate::rng::{Bag, RandomSource, SimpleRng};
use crate::scoring::{row_clear_points, soft_drop_bonus};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{
    gravity_frames_for_level, Button, Changes, GameMode, PieceKind, Rotation,
    LINE_CLEAR_HOLD_FRAMES, MAX_LEVEL, WAIT_TIMEOUT_FRAMES,
};

/// Parameters for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Starting level, clamped to 0..=29
    pub level: u8,
    /// Best score carried in from a previous session
    pub top_score: u32,
}

impl GameConfig {
    pub fn new(level: u8, top_score: u32) -> Self {
        Self {
            level: level.min(MAX_LEVEL),
            top_score,
        }
    }
}

/// Sub-state of [`Mode::Playing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPhase {
    /// Normal play: gravity runs and buttons move the piece
    Active,
    /// Completed rows are shown marked; input is ignored until the hold expires
    ClearingLines { frames_remaining: u8 },
}

/// Current mode, including the playing sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Init,
    LevelSelect,
    Playing(PlayPhase),
    Paused,
    GameOver,
}

impl Mode {
    /// Mode without its payload
    pub fn kind(&self) -> GameMode {
        match self {
            Mode::Init => GameMode::Init,
            Mode::LevelSelect => GameMode::LevelSelect,
            Mode::Playing(_) => GameMode::Playing,
            Mode::Paused => GameMode::Paused,
            Mode::GameOver => GameMode::GameOver,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    active: Piece,
    next: Piece,
    board: Board,
    bag: Bag,
    rng: R,
    score: u32,
    top_score: u32,
    level: u8,
    lines: u32,
    /// Frames per automatic one-row drop
    gravity_frames: u8,
    gravity_counter: u8,
    buttons: ButtonState,
    mode: Mode,
    /// Frames spent in the current mode (wait timeouts)
    mode_frames: u8,
}

impl GameState<SimpleRng> {
    /// Create a new game seeded with `seed`
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing randomness from `rng`
    ///
    /// The game starts in [`Mode::Init`] with an opener-filtered bag and both
    /// the active and the next piece already dealt.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let placeholder = Piece::spawn(PieceKind::I, Rotation::North);
        let mut state = Self {
            active: placeholder,
            next: placeholder,
            board: Board::new(),
            bag: Bag::new(),
            rng,
            score: 0,
            top_score: 0,
            level: 0,
            lines: 0,
            gravity_frames: gravity_frames_for_level(0),
            gravity_counter: 0,
            buttons: ButtonState::new(),
            mode: Mode::Init,
            mode_frames: 0,
        };
        state.reset(config);
        state
    }

    /// Reinitialize in place, keeping only the random source
    fn reset(&mut self, config: GameConfig) {
        let level = config.level.min(MAX_LEVEL);
        self.board.clear();
        self.buttons = ButtonState::new();
        self.score = 0;
        self.top_score = config.top_score;
        self.level = level;
        self.lines = 0;
        self.gravity_frames = gravity_frames_for_level(level);
        self.gravity_counter = 0;
        self.mode = Mode::Init;
        self.mode_frames = 0;

        self.bag.refill_for_opening(&mut self.rng);
        self.active = self.deal_piece();
        self.next = self.deal_piece();
        debug!(level, top_score = self.top_score, "game initialized");
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn game_mode(&self) -> GameMode {
        self.mode.kind()
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score seen, raised to the current score when a game ends
    pub fn top_score(&self) -> u32 {
        self.top_score
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn gravity_frames(&self) -> u8 {
        self.gravity_frames
    }

    pub fn gravity_counter(&self) -> u8 {
        self.gravity_counter
    }

    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    pub fn mode_frames(&self) -> u8 {
        self.mode_frames
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = PieceSnapshot::from(self.active);
        out.next = PieceSnapshot::from(self.next);
        out.score = self.score;
        out.top_score = self.top_score;
        out.level = self.level;
        out.lines = self.lines;
        out.gravity_frames = self.gravity_frames;
        out.mode = self.mode.kind();
        out.clearing_frames = match self.mode {
            Mode::Playing(PlayPhase::ClearingLines { frames_remaining }) => Some(frames_remaining),
            _ => None,
        };
        out.highest_block = self.board.highest_block();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one frame with the button currently held
    pub fn tick(&mut self, button: Button) -> Changes {
        match self.mode {
            Mode::Init => self.wait_for_button(button, Some(WAIT_TIMEOUT_FRAMES)),
            Mode::LevelSelect => self.level_select(button),
            Mode::Playing(PlayPhase::Active) => self.play(button),
            Mode::Playing(PlayPhase::ClearingLines { frames_remaining }) => {
                self.hold_line_clear(frames_remaining)
            }
            Mode::Paused => self.wait_for_button(button, None),
            Mode::GameOver => self.wait_for_button(button, Some(WAIT_TIMEOUT_FRAMES)),
        }
    }

    /// Move to the mode the transition table allows for `requested`
    fn transition(&mut self, requested: GameMode) -> Changes {
        let from = self.mode.kind();
        let mut changes = Changes::empty();

        let next = match self.mode {
            Mode::Init => Mode::LevelSelect,
            Mode::LevelSelect => Mode::Playing(PlayPhase::Active),
            Mode::Playing(_) if requested == GameMode::Paused => Mode::Paused,
            Mode::Playing(_) => {
                self.top_score = self.top_score.max(self.score);
                debug!(score = self.score, lines = self.lines, "game over");
                Mode::GameOver
            }
            Mode::Paused => Mode::Playing(PlayPhase::Active),
            Mode::GameOver => {
                self.reset(GameConfig::new(self.level, self.top_score));
                changes = Changes::BOARD | Changes::PIECE;
                Mode::Playing(PlayPhase::Active)
            }
        };

        debug!(?from, ?requested, to = ?next.kind(), "mode transition");
        self.mode = next;
        self.mode_frames = 0;
        changes
    }

    /// Title, pause and game-over screens: any new press advances, and with a
    /// timeout so does idling long enough
    fn wait_for_button(&mut self, button: Button, timeout: Option<u8>) -> Changes {
        if button.is_pressed() {
            if self.buttons.should_act(button, RepeatPolicy::OneShot) {
                return self.transition(GameMode::Playing);
            }
            return Changes::empty();
        }

        self.buttons.record(Button::None);
        if let Some(limit) = timeout {
            if self.mode_frames >= limit {
                return self.transition(GameMode::Playing);
            }
            self.mode_frames += 1;
        }
        Changes::empty()
    }

    fn level_select(&mut self, button: Button) -> Changes {
        match button {
            Button::Up => {
                if self.buttons.should_act(button, RepeatPolicy::RepeatAfterDelay) {
                    self.set_level(self.level.saturating_add(1));
                }
            }
            Button::Down => {
                if self.buttons.should_act(button, RepeatPolicy::RepeatAfterDelay) {
                    self.set_level(self.level.saturating_sub(1));
                }
            }
            Button::Primary => {
                if self.buttons.should_act(button, RepeatPolicy::OneShot) {
                    return self.transition(GameMode::Playing);
                }
            }
            _ => self.buttons.record(button),
        }
        Changes::empty()
    }

    fn set_level(&mut self, level: u8) {
        self.level = level.min(MAX_LEVEL);
        self.gravity_frames = gravity_frames_for_level(self.level);
        trace!(level = self.level, gravity = self.gravity_frames, "level selected");
    }

    /// Normal play: one button, one decision
    fn play(&mut self, button: Button) -> Changes {
        match button {
            Button::Exit => Changes::empty(),
            Button::None => {
                self.buttons.record(button);
                self.apply_gravity()
            }
            Button::Left => {
                let moved = self.buttons.should_act(button, RepeatPolicy::RepeatAfterDelay)
                    && self.try_move(-1, 0);
                if moved {
                    Changes::PIECE
                } else {
                    Changes::empty()
                }
            }
            Button::Right => {
                let moved = self.buttons.should_act(button, RepeatPolicy::RepeatAfterDelay)
                    && self.try_move(1, 0);
                if moved {
                    Changes::PIECE
                } else {
                    Changes::empty()
                }
            }
            Button::Down => {
                if self.buttons.should_act(button, RepeatPolicy::Repeat) && self.try_move(0, 1) {
                    self.score += soft_drop_bonus(self.buttons.held_frames());
                    Changes::PIECE
                } else {
                    Changes::empty()
                }
            }
            Button::Primary => {
                if self.buttons.should_act(button, RepeatPolicy::OneShot) && self.try_rotate() {
                    Changes::PIECE
                } else {
                    Changes::empty()
                }
            }
            Button::Secondary => {
                if self.buttons.should_act(button, RepeatPolicy::OneShot) {
                    self.transition(GameMode::Paused);
                }
                Changes::empty()
            }
            Button::Up => {
                self.buttons.record(button);
                Changes::empty()
            }
        }
    }

    fn apply_gravity(&mut self) -> Changes {
        self.gravity_counter = self.gravity_counter.saturating_add(1);
        if self.gravity_counter < self.gravity_frames {
            return Changes::empty();
        }
        self.gravity_counter = 0;

        if self.try_move(0, 1) {
            return Changes::PIECE;
        }
        self.lock_active()
    }

    /// Commit the active piece and either start the clear hold or spawn
    fn lock_active(&mut self) -> Changes {
        self.board.lock(&self.active);

        let rows = self.board.detect_full_rows(self.active.y);
        if !rows.is_empty() {
            let cleared = rows.len();
            let points = row_clear_points(cleared, self.level);
            self.score += points;
            self.lines += cleared as u32;
            self.mode = Mode::Playing(PlayPhase::ClearingLines {
                frames_remaining: LINE_CLEAR_HOLD_FRAMES,
            });
            debug!(rows = ?rows.as_slice(), points, score = self.score, "rows completed");
            return Changes::BOARD | Changes::LINE_CLEAR;
        }

        trace!(kind = ?self.active.kind, x = self.active.x, y = self.active.y, "piece locked");
        if !self.spawn_next() {
            self.transition(GameMode::GameOver);
        }
        Changes::BOARD | Changes::PIECE
    }

    fn hold_line_clear(&mut self, frames_remaining: u8) -> Changes {
        let remaining = frames_remaining.saturating_sub(1);
        if remaining > 0 {
            self.mode = Mode::Playing(PlayPhase::ClearingLines {
                frames_remaining: remaining,
            });
            return Changes::empty();
        }

        self.board.compact();
        self.mode = Mode::Playing(PlayPhase::Active);
        if !self.spawn_next() {
            self.transition(GameMode::GameOver);
            return Changes::BOARD;
        }
        Changes::BOARD | Changes::PIECE | Changes::LINE_CLEAR
    }

    /// Promote the look-ahead piece and deal a new one
    ///
    /// Returns whether the new active piece fits at its spawn pose.
    fn spawn_next(&mut self) -> bool {
        let next = self.deal_piece();
        self.active = std::mem::replace(&mut self.next, next);
        self.board.fits(&self.active, self.active.rotation, 0, 0)
    }

    fn deal_piece(&mut self) -> Piece {
        let kind = self.bag.deal(&mut self.rng);
        let rotation = Rotation::from_quarter_turns(self.rng.next_below(4));
        Piece::spawn(kind, rotation)
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.board.fits(&self.active, self.active.rotation, dx, dy) {
            self.active.x += dx;
            self.active.y += dy;
            true
        } else {
            false
        }
    }

    /// Rotate clockwise, kicking one column right then left if blocked
    pub(crate) fn try_rotate(&mut self) -> bool {
        let rotation = self.active.rotation.rotate_cw();
        for dx in [0, 1, -1] {
            if self.board.fits(&self.active, rotation, dx, 0) {
                self.active.rotation = rotation;
                self.active.x += dx;
                return true;
            }
        }
        false
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
