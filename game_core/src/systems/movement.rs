use glam::Vec2;
use hecs::World;

use crate::components::*;
use crate::{Config, Field};

use super::{enemy_pos, player_pos};

/// Apply player movement from the held keys
pub fn move_player(world: &mut World) {
    for (_entity, (body, tuning, control, _player)) in
        world.query_mut::<(&mut Body, &Tuning, &PlayerControl, &Player)>()
    {
        body.integrate(tuning, control.direction());
    }
}

/// Move the ball for this frame according to who holds it.
///
/// A held ball is pinned next to its owner with zero velocity: in front of the
/// player along the aim direction, or at a fixed offset from the enemy. A free
/// ball rolls and slows by friction.
pub fn move_ball(world: &mut World, config: &Config, aim_target: Vec2) {
    let player = player_pos(world);
    let enemy = enemy_pos(world);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        match (ball.owner, player, enemy) {
            (Owner::Player, Some(player), _) => {
                let dir = aim_direction(player, aim_target);
                ball.pos = player + dir * config.player_carry_distance;
                ball.vel = Vec2::ZERO;
            }
            (Owner::Enemy, _, Some(enemy)) => {
                ball.pos = enemy + Vec2::new(config.enemy_carry_offset_x, 0.0);
                ball.vel = Vec2::ZERO;
            }
            _ => {
                ball.vel *= config.ball_friction;
                ball.pos += ball.vel;
            }
        }
    }
}

/// Where the enemy wants to be this frame
pub fn enemy_target(field: &Field, config: &Config, ball: &Ball, player: Vec2) -> Vec2 {
    match ball.owner {
        Owner::Enemy => field.left_goal_target(config.enemy_goal_approach),
        Owner::Player => player,
        Owner::None => ball.pos,
    }
}

/// Steer the enemy toward its target: the goal when carrying, the player
/// when pressing, the loose ball otherwise.
pub fn move_enemy(world: &mut World, field: &Field, config: &Config) {
    let Some(ball) = super::ball_state(world) else {
        return;
    };
    let Some(player) = player_pos(world) else {
        return;
    };
    let target = enemy_target(field, config, &ball, player);

    for (_entity, (body, tuning, _enemy)) in world.query_mut::<(&mut Body, &Tuning, &Enemy)>() {
        let dir = seek(body.pos, target, config.enemy_dead_zone);
        body.integrate(tuning, dir);
    }
}
