pub mod camera;
pub mod components;
pub mod config;
pub mod field;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;
pub mod view;

pub use camera::*;
pub use components::*;
pub use config::*;
pub use field::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use view::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the match simulation.
///
/// Order is fixed: inputs, player, ball, enemy, camera. Each phase sees the
/// results of the ones before it.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    field: &Field,
    config: &Config,
    camera: &mut Camera,
    pointer: &mut Pointer,
    state: &mut MatchState,
    events: &mut Events,
    inputs: &mut InputQueue,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (key flags, charge start, shot release)
    ingest_inputs(world, inputs, pointer, camera, events);

    // 2. Move player based on held keys
    move_player(world);

    // 3. Ball: carry or roll, contacts, charge, then goal before bounds
    let aim_target = camera.screen_to_world(pointer.screen);
    move_ball(world, config, aim_target);
    resolve_possession(world, config, events);
    charge_ball(world, config);
    check_scoring(world, field, config, state, events);

    // 4. Enemy picks a target, moves, and contests the ball from its new spot
    move_enemy(world, field, config);
    resolve_possession(world, config, events);

    // 5. Camera follows the player
    if let Some(player) = player_body(world) {
        camera.follow(player.pos);
    }
}

/// Helper to create the keyboard-driven player
pub fn create_player(world: &mut World, config: &Config, pos: Vec2) -> hecs::Entity {
    world.spawn((
        Player,
        Body::new(pos),
        config.player_tuning(),
        PlayerControl::new(),
    ))
}

/// Helper to create the AI opponent
pub fn create_enemy(world: &mut World, config: &Config, pos: Vec2) -> hecs::Entity {
    world.spawn((Enemy, Body::new(pos), config.enemy_tuning()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config, pos: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, config.ball_radius, config.max_shoot_power),))
}
