use glam::Vec2;
use hecs::World;
use tracing::info;

use crate::systems::{ball_state, enemy_body, player_body};
use crate::{
    create_ball, create_enemy, create_player, step, Ball, Body, Camera, Config, ConfigError,
    Events, Field, FrameView, HudFrame, InputEvent, InputQueue, MatchState, Pointer,
};

/// A running match: the world plus every resource `step` needs
pub struct Game {
    pub world: World,
    pub field: Field,
    pub config: Config,
    pub camera: Camera,
    pub pointer: Pointer,
    pub state: MatchState,
    pub events: Events,
    pub inputs: InputQueue,
    pub frame: u64,
}

impl Game {
    /// Set up kick-off: player and ball on the centre spot, enemy in the right half
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = Field::from_config(&config);
        let mut world = World::new();
        create_player(&mut world, &config, field.center());
        create_enemy(
            &mut world,
            &config,
            Vec2::new(field.half_width() / 2.0, 0.0),
        );
        create_ball(&mut world, &config, field.center());

        let camera = Camera::new(
            Vec2::new(config.viewport_width, config.viewport_height),
            config.camera_smoothing,
        );

        info!(
            width = field.width,
            height = field.height,
            goal_height = field.goal_height,
            "match created"
        );

        Ok(Self {
            world,
            field,
            config,
            camera,
            pointer: Pointer::default(),
            state: MatchState::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
            frame: 0,
        })
    }

    /// Queue an input event for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.inputs.push(event);
    }

    /// Advance one frame
    pub fn step(&mut self) {
        step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.camera,
            &mut self.pointer,
            &mut self.state,
            &mut self.events,
            &mut self.inputs,
        );
        self.frame += 1;
    }

    pub fn player(&self) -> Option<Body> {
        player_body(&self.world)
    }

    pub fn enemy(&self) -> Option<Body> {
        enemy_body(&self.world)
    }

    pub fn ball(&self) -> Option<Ball> {
        ball_state(&self.world)
    }

    pub fn view(&self) -> Option<FrameView> {
        FrameView::capture(
            &self.world,
            &self.field,
            &self.camera,
            &self.pointer,
            &self.state,
        )
    }

    /// HUD for the frame being displayed; advances the goal banner
    pub fn hud(&mut self) -> HudFrame {
        HudFrame::next(&mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, Owner};

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            field_height: -1.0,
            ..Config::new()
        };
        assert!(Game::new(config).is_err());
    }

    #[test]
    fn test_kick_off_layout() {
        let game = Game::new(Config::new()).unwrap();
        assert_eq!(game.player().unwrap().pos, Vec2::ZERO);
        assert_eq!(game.enemy().unwrap().pos, Vec2::new(500.0, 0.0));
        assert_eq!(game.ball().unwrap().pos, Vec2::ZERO);
        assert_eq!(game.state, MatchState::new());
    }

    #[test]
    fn test_player_collects_ball_on_first_frame() {
        let mut game = Game::new(Config::new()).unwrap();
        game.step();
        assert_eq!(game.ball().unwrap().owner, Owner::Player);
        assert_eq!(game.frame, 1);
    }

    #[test]
    fn test_inputs_apply_on_next_step() {
        let mut game = Game::new(Config::new()).unwrap();
        game.push_input(InputEvent::KeyDown(Key::Down));
        assert_eq!(game.player().unwrap().vel, Vec2::ZERO);

        game.step();
        assert!(game.player().unwrap().vel.y > 0.0);
    }

    #[test]
    fn test_view_and_hud() {
        let mut game = Game::new(Config::new()).unwrap();
        game.step();

        let view = game.view().unwrap();
        assert_eq!(view.ball.owner, Owner::Player);
        assert!(view.aim.is_some(), "arrow shows while player has the ball");

        let hud = game.hud();
        assert_eq!(hud.score_text, "0 : 0");
        assert_eq!(hud.goal_banner, None);
    }
}
