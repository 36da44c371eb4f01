pub mod input;
pub mod movement;
pub mod possession;
pub mod scoring;

pub use input::*;
pub use movement::*;
pub use possession::*;
pub use scoring::*;

use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Body, Enemy, Player};

/// Current player body, if one is spawned
pub fn player_body(world: &World) -> Option<Body> {
    world
        .query::<(&Body, &Player)>()
        .iter()
        .next()
        .map(|(_e, (body, _))| *body)
}

/// Current enemy body, if one is spawned
pub fn enemy_body(world: &World) -> Option<Body> {
    world
        .query::<(&Body, &Enemy)>()
        .iter()
        .next()
        .map(|(_e, (body, _))| *body)
}

/// Copy of the ball, if one is spawned
pub fn ball_state(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

pub(crate) fn player_pos(world: &World) -> Option<Vec2> {
    player_body(world).map(|body| body.pos)
}

pub(crate) fn enemy_pos(world: &World) -> Option<Vec2> {
    enemy_body(world).map(|body| body.pos)
}
