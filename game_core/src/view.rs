//! Read-only frame data for renderers
//!
//! Everything a drawing layer needs after a `step`: entity positions, the aim
//! arrow, and the HUD text. Producing a [`HudFrame`] is the one place the goal
//! banner countdown advances.

use glam::Vec2;
use hecs::World;

use crate::camera::Camera;
use crate::components::{aim_direction, Ball, Owner};
use crate::field::Field;
use crate::params::Params;
use crate::resources::{MatchState, Pointer};
use crate::systems::{ball_state, enemy_body, player_body};

pub const GOAL_BANNER: &str = "GOAL!";

/// Aim arrow drawn from the player while it has the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimArrow {
    pub origin: Vec2,
    /// Radians, measured from +x toward +y
    pub angle: f32,
    pub length: f32,
    /// Length of the charge bar along the arrow, only while charging
    pub charge_len: Option<f32>,
}

impl AimArrow {
    pub fn for_ball(player: Vec2, aim_target: Vec2, ball: &Ball) -> Option<Self> {
        if ball.owner != Owner::Player {
            return None;
        }

        let dir = aim_direction(player, aim_target);
        let charge_len = ball
            .charging
            .then(|| ball.shoot_power / ball.max_shoot_power * Params::AIM_ARROW_LENGTH);

        Some(Self {
            origin: player,
            angle: dir.y.atan2(dir.x),
            length: Params::AIM_ARROW_LENGTH,
            charge_len,
        })
    }

    pub fn tip(&self) -> Vec2 {
        self.origin + Vec2::from_angle(self.angle) * self.length
    }
}

/// Snapshot of one simulated frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub field: Field,
    pub player: Vec2,
    pub enemy: Vec2,
    pub ball: Ball,
    pub camera_offset: Vec2,
    pub aim: Option<AimArrow>,
    pub left_score: u32,
    pub right_score: u32,
}

impl FrameView {
    pub fn capture(
        world: &World,
        field: &Field,
        camera: &Camera,
        pointer: &Pointer,
        state: &MatchState,
    ) -> Option<Self> {
        let player = player_body(world)?.pos;
        let enemy = enemy_body(world)?.pos;
        let ball = ball_state(world)?;
        let aim = AimArrow::for_ball(player, camera.screen_to_world(pointer.screen), &ball);

        Some(Self {
            field: *field,
            player,
            enemy,
            ball,
            camera_offset: camera.offset,
            aim,
            left_score: state.left_score,
            right_score: state.right_score,
        })
    }
}

/// On-screen text for one displayed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudFrame {
    pub score_text: String,
    pub goal_banner: Option<&'static str>,
}

impl HudFrame {
    /// Build the HUD and consume one frame of the goal banner
    pub fn next(state: &mut MatchState) -> Self {
        let score_text = state.score_text();
        let goal_banner = state.take_banner_frame().then_some(GOAL_BANNER);
        Self {
            score_text,
            goal_banner,
        }
    }
}
