//! Input sources that stand in for a keyboard and mouse

use game_core::{FrameView, GameRng, InputEvent, Key, Owner, PlayerControl};
use glam::Vec2;
use rand::Rng;

/// How the player is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Script {
    /// No input at all
    Idle,
    /// Chase the ball, carry it at the right goal and shoot
    Dribble,
    /// Seeded random key and pointer events
    Random,
}

/// Keys within this distance of the target on an axis are released
const AXIS_SLACK: f32 = 8.0;
/// Shoot once the ball is this close to the right goal line
const SHOOTING_RANGE: f32 = 350.0;

pub struct Driver {
    script: Script,
    rng: GameRng,
    held: PlayerControl,
    pointer_down: bool,
}

impl Driver {
    pub fn new(script: Script, seed: u64) -> Self {
        Self {
            script,
            rng: GameRng::new(seed),
            held: PlayerControl::new(),
            pointer_down: false,
        }
    }

    /// Input events for the next frame, given what the previous frame showed
    pub fn next_inputs(&mut self, view: &FrameView) -> Vec<InputEvent> {
        match self.script {
            Script::Idle => Vec::new(),
            Script::Dribble => self.dribble(view),
            Script::Random => self.random(),
        }
    }

    fn dribble(&mut self, view: &FrameView) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let goal = Vec2::new(view.field.half_width() + 40.0, 0.0);

        let target = match view.ball.owner {
            Owner::Player => goal,
            _ => view.ball.pos,
        };
        self.steer(view.player, target, &mut events);

        // Pointer in screen space so that it lands on the goal in world space
        events.push(InputEvent::PointerMoved(goal - view.camera_offset));

        let has_ball = view.ball.owner == Owner::Player;
        let in_range = goal.x - view.ball.pos.x < SHOOTING_RANGE;
        if has_ball && !self.pointer_down {
            events.push(InputEvent::PointerDown);
            self.pointer_down = true;
        } else if self.pointer_down && (!has_ball || in_range || at_full_power(view)) {
            events.push(InputEvent::PointerUp);
            self.pointer_down = false;
        }

        events
    }

    fn steer(&mut self, from: Vec2, to: Vec2, events: &mut Vec<InputEvent>) {
        let delta = to - from;
        let wanted = PlayerControl {
            up: delta.y < -AXIS_SLACK,
            down: delta.y > AXIS_SLACK,
            left: delta.x < -AXIS_SLACK,
            right: delta.x > AXIS_SLACK,
        };

        for (key, was, now) in [
            (Key::Up, self.held.up, wanted.up),
            (Key::Down, self.held.down, wanted.down),
            (Key::Left, self.held.left, wanted.left),
            (Key::Right, self.held.right, wanted.right),
        ] {
            match (was, now) {
                (false, true) => events.push(InputEvent::KeyDown(key)),
                (true, false) => events.push(InputEvent::KeyUp(key)),
                _ => {}
            }
        }
        self.held = wanted;
    }

    fn random(&mut self) -> Vec<InputEvent> {
        if !self.rng.0.gen_bool(0.15) {
            return Vec::new();
        }

        let key = match self.rng.0.gen_range(0..4) {
            0 => Key::Up,
            1 => Key::Down,
            2 => Key::Left,
            _ => Key::Right,
        };
        let event = match self.rng.0.gen_range(0..5) {
            0 => InputEvent::KeyDown(key),
            1 => InputEvent::KeyUp(key),
            2 => InputEvent::PointerMoved(Vec2::new(
                self.rng.0.gen_range(0.0..1280.0),
                self.rng.0.gen_range(0.0..720.0),
            )),
            3 => InputEvent::PointerDown,
            _ => InputEvent::PointerUp,
        };
        vec![event]
    }
}

fn at_full_power(view: &FrameView) -> bool {
    view.ball.shoot_power >= view.ball.max_shoot_power
}
