use glam::Vec2;

use crate::config::Config;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Which score counter a goal credits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringSide {
    /// Ball went out through the right goal mouth
    Left,
    /// Ball went out through the left goal mouth
    Right,
}

/// The pitch: a `width` x `height` rectangle centred on the origin with a
/// goal mouth cut into the middle of each side line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub goal_width: f32, // only used for drawing
    pub goal_height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(Params::FIELD_WIDTH, Params::FIELD_HEIGHT)
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            goal_width: Params::GOAL_WIDTH,
            goal_height: Params::GOAL_HEIGHT,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
            goal_width: config.goal_width,
            goal_height: config.goal_height,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Playing surface, side lines included
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center(), Vec2::new(self.width, self.height))
    }

    /// True when `y` lies strictly inside the goal mouth span
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        y > -self.goal_height / 2.0 && y < self.goal_height / 2.0
    }

    /// Whether a ball at `pos` is still in play.
    ///
    /// Top and bottom lines are solid along their whole length. Past a side
    /// line the ball is only in play while it is inside the goal mouth.
    pub fn in_bounds(&self, pos: Vec2) -> bool {
        if pos.y < -self.half_height() || pos.y > self.half_height() {
            return false;
        }

        if pos.x < -self.half_width() || pos.x > self.half_width() {
            return self.in_goal_mouth(pos.y);
        }

        true
    }

    /// Detect a ball that has crossed a side line inside a goal mouth.
    ///
    /// Crossing the left line credits the right score, crossing the right
    /// line credits the left score.
    pub fn check_goal(&self, pos: Vec2) -> Option<ScoringSide> {
        if !self.in_goal_mouth(pos.y) {
            return None;
        }

        if pos.x < -self.half_width() {
            Some(ScoringSide::Right)
        } else if pos.x > self.half_width() {
            Some(ScoringSide::Left)
        } else {
            None
        }
    }

    /// Point just beyond the left goal mouth that the enemy carries the ball to
    pub fn left_goal_target(&self, approach: f32) -> Vec2 {
        Vec2::new(-self.half_width() - approach, 0.0)
    }

    /// Goal boxes drawn behind the left and right side lines
    pub fn goal_boxes(&self) -> [Aabb; 2] {
        let half_goal = self.goal_height / 2.0;
        let depth = Params::GOAL_DEPTH;
        [
            Aabb::new(
                Vec2::new(-self.half_width() - depth, -half_goal),
                Vec2::new(-self.half_width(), half_goal),
            ),
            Aabb::new(
                Vec2::new(self.half_width(), -half_goal),
                Vec2::new(self.half_width() + depth, half_goal),
            ),
        ]
    }

    pub fn centre_circle_radius(&self) -> f32 {
        Params::CENTRE_CIRCLE_DIAMETER / 2.0
    }

    /// Endpoints of the halfway line
    pub fn halfway_line(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(0.0, -self.half_height()),
            Vec2::new(0.0, self.half_height()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::new(2000.0, 1200.0)
    }

    #[test]
    fn test_interior_is_in_bounds() {
        let field = field();
        assert!(field.in_bounds(Vec2::ZERO));
        assert!(field.in_bounds(Vec2::new(999.0, 599.0)));
        assert!(field.in_bounds(Vec2::new(-1000.0, -600.0)), "lines are in play");
    }

    #[test]
    fn test_top_and_bottom_are_solid() {
        let field = field();
        assert!(!field.in_bounds(Vec2::new(0.0, 601.0)));
        assert!(!field.in_bounds(Vec2::new(0.0, -601.0)));
        // Even past the side line, over the top is out
        assert!(!field.in_bounds(Vec2::new(-1001.0, 601.0)));
    }

    #[test]
    fn test_goal_mouth_is_open() {
        let field = field();
        assert!(field.in_bounds(Vec2::new(-1001.0, 0.0)));
        assert!(field.in_bounds(Vec2::new(1001.0, 149.0)));
        assert!(!field.in_bounds(Vec2::new(1001.0, 150.0)), "mouth edge is post");
    }

    #[test]
    fn test_left_mouth_credits_right_score() {
        let field = field();
        assert_eq!(
            field.check_goal(Vec2::new(-1001.0, 0.0)),
            Some(ScoringSide::Right)
        );
    }

    #[test]
    fn test_right_mouth_credits_left_score() {
        let field = field();
        assert_eq!(
            field.check_goal(Vec2::new(1001.0, -100.0)),
            Some(ScoringSide::Left)
        );
    }

    #[test]
    fn test_wide_of_the_post_is_out_not_goal() {
        let field = field();
        let pos = Vec2::new(-1001.0, 200.0);
        assert!(!field.in_bounds(pos));
        assert_eq!(field.check_goal(pos), None);
    }

    #[test]
    fn test_no_goal_inside_field() {
        let field = field();
        assert_eq!(field.check_goal(Vec2::new(-999.0, 0.0)), None);
        assert_eq!(field.check_goal(Vec2::new(1000.0, 0.0)), None);
    }

    #[test]
    fn test_goal_boxes_sit_outside_side_lines() {
        let field = field();
        let [left, right] = field.goal_boxes();
        assert_eq!(left.max.x, -1000.0);
        assert_eq!(right.min.x, 1000.0);
        assert_eq!(left.size(), Vec2::new(Params::GOAL_DEPTH, 300.0));
        assert!(left.contains(Vec2::new(-1010.0, 0.0)));
    }

    #[test]
    fn test_left_goal_target() {
        let field = field();
        assert_eq!(field.left_goal_target(50.0), Vec2::new(-1050.0, 0.0));
    }
}
