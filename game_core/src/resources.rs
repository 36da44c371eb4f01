use glam::Vec2;

use crate::components::Owner;
use crate::field::ScoringSide;

/// Score counters and the goal celebration countdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchState {
    pub left_score: u32,
    pub right_score: u32,
    pub goal_timer: u32, // frames left on the "GOAL!" banner, 0 = hidden
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a goal and start the celebration banner
    pub fn credit(&mut self, side: ScoringSide, banner_frames: u32) {
        match side {
            ScoringSide::Left => self.left_score += 1,
            ScoringSide::Right => self.right_score += 1,
        }
        self.goal_timer = banner_frames;
    }

    pub fn banner_active(&self) -> bool {
        self.goal_timer > 0
    }

    /// Consume one displayed banner frame. Returns whether the banner shows this frame.
    pub fn take_banner_frame(&mut self) -> bool {
        if self.goal_timer > 0 {
            self.goal_timer -= 1;
            true
        } else {
            false
        }
    }

    pub fn score_text(&self) -> String {
        format!("{} : {}", self.left_score, self.right_score)
    }
}

/// Random number generator for input scripts and soak runs
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_out: bool,
    pub shot_fired: Option<Vec2>,
    pub possession_changed: Option<Owner>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_out = false;
        self.shot_fired = None;
        self.possession_changed = None;
    }

    pub fn goal_scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a key name from the host's keyboard events
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" | "ArrowUp" => Some(Key::Up),
            "s" | "S" | "ArrowDown" => Some(Key::Down),
            "a" | "A" | "ArrowLeft" => Some(Key::Left),
            "d" | "D" | "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Edge-triggered input from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer moved, in screen coordinates
    PointerMoved(Vec2),
    PointerDown,
    PointerUp,
}

/// Input events waiting for the next frame
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Last known pointer position in screen space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub screen: Vec2,
}
