use glam::Vec2;

/// Marker for the keyboard-driven player
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

/// Marker for the AI opponent
#[derive(Debug, Clone, Copy, Default)]
pub struct Enemy;

/// Position and velocity of a running entity
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Advance one frame.
    ///
    /// With a direction the body accelerates along it, without one it
    /// coasts down by friction. Speed is then capped and position integrated.
    pub fn integrate(&mut self, tuning: &Tuning, direction: Option<Vec2>) {
        match direction {
            Some(dir) => self.vel += dir * tuning.accel,
            None => self.vel *= tuning.friction,
        }

        let speed = self.vel.length();
        if speed > tuning.max_speed {
            self.vel = self.vel / speed * tuning.max_speed;
        }

        self.pos += self.vel;
    }
}

/// Per-entity movement constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub accel: f32,
    pub friction: f32,
    pub max_speed: f32,
}

impl Tuning {
    pub fn new(accel: f32, friction: f32, max_speed: f32) -> Self {
        Self {
            accel,
            friction,
            max_speed,
        }
    }
}

/// Held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerControl {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit direction of the held keys, `None` when they cancel out or none are held
    pub fn direction(&self) -> Option<Vec2> {
        let mut dir = Vec2::ZERO;
        if self.right {
            dir.x += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }

        if dir == Vec2::ZERO {
            None
        } else {
            Some(dir.normalize())
        }
    }
}

/// Unit direction from `from` toward `to`, `None` inside the dead-zone
pub fn seek(from: Vec2, to: Vec2, dead_zone: f32) -> Option<Vec2> {
    let delta = to - from;
    let dist = delta.length();
    if dist > dead_zone {
        Some(delta / dist)
    } else {
        None
    }
}

/// Unit direction from `from` toward `to`, facing +x when the points coincide
pub fn aim_direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(Vec2::X)
}

/// Who controls the ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Owner {
    #[default]
    None,
    Player,
    Enemy,
}

/// The ball. Possession lives here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub owner: Owner,
    pub charging: bool,
    pub shoot_power: f32,
    pub max_shoot_power: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, max_shoot_power: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            owner: Owner::None,
            charging: false,
            shoot_power: 0.0,
            max_shoot_power,
        }
    }

    pub fn is_free(&self) -> bool {
        self.owner == Owner::None
    }

    /// Put the ball back on the centre spot, loose and still
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
        self.owner = Owner::None;
        self.charging = false;
        self.shoot_power = 0.0;
    }

    /// Add one frame of charge. Only a player-held ball charges.
    pub fn charge(&mut self, rate: f32) {
        if self.charging && self.owner == Owner::Player {
            self.shoot_power = (self.shoot_power + rate).min(self.max_shoot_power);
        }
    }

    /// Begin a charge from zero. Returns false when the player lacks the ball.
    pub fn start_charging(&mut self) -> bool {
        if self.owner != Owner::Player {
            return false;
        }
        self.charging = true;
        self.shoot_power = 0.0;
        true
    }

    /// Release the ball along `dir` with the charged power.
    /// Returns the launch velocity, or `None` when the player lacks the ball.
    pub fn shoot(&mut self, dir: Vec2) -> Option<Vec2> {
        if self.owner != Owner::Player {
            return None;
        }
        self.vel = dir * self.shoot_power;
        self.owner = Owner::None;
        self.charging = false;
        self.shoot_power = 0.0;
        Some(self.vel)
    }
}
