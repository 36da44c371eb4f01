use thiserror::Error;

use crate::components::Tuning;
use crate::params::Params;

/// Reasons a [`Config`] cannot drive a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("field must have positive size, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    #[error("goal height {goal_height} must be positive and fit the field height {field_height}")]
    InvalidGoal { goal_height: f32, field_height: f32 },

    #[error("{name} friction must be in (0, 1], got {value}")]
    InvalidFriction { name: &'static str, value: f32 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    pub player_accel: f32,
    pub player_friction: f32,
    pub player_max_speed: f32,
    pub enemy_accel: f32,
    pub enemy_friction: f32,
    pub enemy_max_speed: f32,
    pub enemy_dead_zone: f32,
    pub enemy_goal_approach: f32,
    pub ball_radius: f32,
    pub ball_friction: f32,
    pub max_shoot_power: f32,
    pub charge_rate: f32,
    pub player_carry_distance: f32,
    pub enemy_carry_offset_x: f32,
    pub pickup_margin: f32,
    pub contact_radius: f32,
    pub goal_banner_frames: u32,
    pub camera_smoothing: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            goal_width: Params::GOAL_WIDTH,
            goal_height: Params::GOAL_HEIGHT,
            player_accel: Params::PLAYER_ACCEL,
            player_friction: Params::PLAYER_FRICTION,
            player_max_speed: Params::PLAYER_MAX_SPEED,
            enemy_accel: Params::ENEMY_ACCEL,
            enemy_friction: Params::ENEMY_FRICTION,
            enemy_max_speed: Params::ENEMY_MAX_SPEED,
            enemy_dead_zone: Params::ENEMY_DEAD_ZONE,
            enemy_goal_approach: Params::ENEMY_GOAL_APPROACH,
            ball_radius: Params::BALL_RADIUS,
            ball_friction: Params::BALL_FRICTION,
            max_shoot_power: Params::MAX_SHOOT_POWER,
            charge_rate: Params::CHARGE_RATE,
            player_carry_distance: Params::PLAYER_CARRY_DISTANCE,
            enemy_carry_offset_x: Params::ENEMY_CARRY_OFFSET_X,
            pickup_margin: Params::PICKUP_MARGIN,
            contact_radius: Params::CONTACT_RADIUS,
            goal_banner_frames: Params::GOAL_BANNER_FRAMES,
            camera_smoothing: Params::CAMERA_SMOOTHING,
            viewport_width: Params::VIEWPORT_WIDTH,
            viewport_height: Params::VIEWPORT_HEIGHT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Movement tuning for the keyboard-driven player
    pub fn player_tuning(&self) -> Tuning {
        Tuning::new(
            self.player_accel,
            self.player_friction,
            self.player_max_speed,
        )
    }

    /// Movement tuning for the AI opponent
    pub fn enemy_tuning(&self) -> Tuning {
        Tuning::new(self.enemy_accel, self.enemy_friction, self.enemy_max_speed)
    }

    /// Distance under which a free ball snaps to the player
    pub fn player_pickup_radius(&self) -> f32 {
        self.ball_radius + self.pickup_margin
    }

    /// Check that every value keeps the simulation well defined
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.goal_height <= 0.0 || self.goal_height > self.field_height {
            return Err(ConfigError::InvalidGoal {
                goal_height: self.goal_height,
                field_height: self.field_height,
            });
        }

        for (name, value) in [
            ("player", self.player_friction),
            ("enemy", self.enemy_friction),
            ("ball", self.ball_friction),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(ConfigError::InvalidFriction { name, value });
            }
        }

        for (name, value) in [
            ("player_accel", self.player_accel),
            ("player_max_speed", self.player_max_speed),
            ("enemy_accel", self.enemy_accel),
            ("enemy_max_speed", self.enemy_max_speed),
            ("ball_radius", self.ball_radius),
            ("max_shoot_power", self.max_shoot_power),
            ("charge_rate", self.charge_rate),
            ("contact_radius", self.contact_radius),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_player_and_enemy_tuning_differ() {
        let config = Config::new();
        let player = config.player_tuning();
        let enemy = config.enemy_tuning();
        assert_eq!(player.accel, 0.4);
        assert_eq!(player.max_speed, 5.0);
        assert_eq!(enemy.accel, 0.35);
        assert_eq!(enemy.max_speed, 4.5);
        assert_eq!(player.friction, enemy.friction);
    }

    #[test]
    fn test_player_pickup_radius() {
        let config = Config::new();
        assert_eq!(config.player_pickup_radius(), 30.0);
    }

    #[test]
    fn test_rejects_empty_field() {
        let config = Config {
            field_width: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_rejects_goal_taller_than_field() {
        let config = Config {
            goal_height: 5000.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGoal { .. })
        ));
    }

    #[test]
    fn test_rejects_friction_above_one() {
        let config = Config {
            ball_friction: 1.2,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidFriction {
                name: "ball",
                value: 1.2
            })
        );
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = Config {
            enemy_max_speed: -1.0,
            ..Config::new()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "enemy_max_speed must be positive, got -1");
    }
}
