use hecs::World;
use tracing::{debug, info};

use crate::field::ScoringSide;
use crate::{Ball, Config, Events, Field, MatchState};

/// Check whether the ball went in or out.
///
/// The goal check runs first, so a ball that is both past a side line and in
/// a goal mouth is scored rather than silently reset.
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = field.check_goal(ball.pos) {
            state.credit(side, config.goal_banner_frames);
            match side {
                ScoringSide::Left => events.left_scored = true,
                ScoringSide::Right => events.right_scored = true,
            }
            info!(
                ?side,
                score = %state.score_text(),
                "goal"
            );

            ball.reset(field.center());
            continue;
        }

        if !field.in_bounds(ball.pos) {
            debug!(x = ball.pos.x, y = ball.pos.y, "ball out of play");
            events.ball_out = true;
            ball.reset(field.center());
        }
    }
}
