/// Game tuning parameters for the soccer match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 2000.0;
    pub const FIELD_HEIGHT: f32 = 1200.0;
    pub const GOAL_WIDTH: f32 = 200.0;
    pub const GOAL_HEIGHT: f32 = 300.0;
    pub const GOAL_DEPTH: f32 = 20.0; // drawn box behind each side line
    pub const CENTRE_CIRCLE_DIAMETER: f32 = 200.0;

    // Player (keyboard driven)
    pub const PLAYER_ACCEL: f32 = 0.4;
    pub const PLAYER_FRICTION: f32 = 0.9;
    pub const PLAYER_MAX_SPEED: f32 = 5.0;
    pub const PLAYER_RADIUS: f32 = 15.0;

    // Enemy (AI driven)
    pub const ENEMY_ACCEL: f32 = 0.35;
    pub const ENEMY_FRICTION: f32 = 0.9;
    pub const ENEMY_MAX_SPEED: f32 = 4.5;
    pub const ENEMY_DEAD_ZONE: f32 = 1.0;
    pub const ENEMY_GOAL_APPROACH: f32 = 50.0; // how far past the left line the enemy dribbles

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_FRICTION: f32 = 0.98;
    pub const BALL_MAX_SPEED: f32 = 12.0; // not enforced, shots are bounded by shoot power
    pub const MAX_SHOOT_POWER: f32 = 15.0;
    pub const CHARGE_RATE: f32 = 0.25; // shoot power gained per frame
    pub const PLAYER_CARRY_DISTANCE: f32 = 30.0;
    pub const ENEMY_CARRY_OFFSET_X: f32 = 20.0;
    pub const PICKUP_MARGIN: f32 = 15.0; // added to the ball radius for player pickups
    pub const CONTACT_RADIUS: f32 = 30.0; // enemy pickups and both steals

    // Match
    pub const GOAL_BANNER_FRAMES: u32 = 120;

    // Camera / display
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;
    pub const AIM_ARROW_LENGTH: f32 = 40.0;
}
