//! Follow camera
//!
//! Smoothly tracks the player so it stays centred in the viewport. The
//! offset is also what turns screen-space pointer positions into world space.

use glam::Vec2;

/// Top-left corner of the viewport in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub viewport: Vec2,
    pub smoothing: f32,
}

impl Camera {
    pub fn new(viewport: Vec2, smoothing: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport,
            smoothing,
        }
    }

    /// Offset that would put `focus` in the middle of the viewport
    pub fn target_for(&self, focus: Vec2) -> Vec2 {
        focus - self.viewport / 2.0
    }

    /// Move a fraction of the remaining distance toward the centred offset
    pub fn follow(&mut self, focus: Vec2) {
        let target = self.target_for(focus);
        self.offset += (target - self.offset) * self.smoothing;
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.offset
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }
}
