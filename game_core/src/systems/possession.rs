use glam::Vec2;
use hecs::World;
use tracing::debug;

use crate::components::*;
use crate::resources::Events;
use crate::Config;

use super::{enemy_pos, player_pos};

/// Work out who owns the ball after this frame's contacts.
///
/// Checks run in a fixed order and each sees the result of the one before:
/// player pickup, enemy pickup, enemy steal, player steal. Both steals share
/// the same contact radius, so when the two bodies touch the player steal runs
/// last and keeps the ball.
pub fn next_owner(ball: &Ball, player: Vec2, enemy: Vec2, config: &Config) -> Owner {
    let mut owner = ball.owner;

    if owner == Owner::None && ball.pos.distance(player) < config.player_pickup_radius() {
        owner = Owner::Player;
    }
    if owner == Owner::None && ball.pos.distance(enemy) < config.contact_radius {
        owner = Owner::Enemy;
    }
    if owner == Owner::Player && enemy.distance(player) < config.contact_radius {
        owner = Owner::Enemy;
    }
    if owner == Owner::Enemy && player.distance(enemy) < config.contact_radius {
        owner = Owner::Player;
    }

    owner
}

/// Apply pickups and steals. `charging` is left alone on a steal.
pub fn resolve_possession(world: &mut World, config: &Config, events: &mut Events) {
    let (Some(player), Some(enemy)) = (player_pos(world), enemy_pos(world)) else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let owner = next_owner(ball, player, enemy, config);
        if owner != ball.owner {
            debug!(from = ?ball.owner, to = ?owner, "possession changed");
            ball.owner = owner;
            events.possession_changed = Some(owner);
        }
    }
}

/// Build shot power while the player holds the ball with the button down
pub fn charge_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.charge(config.charge_rate);
    }
}
