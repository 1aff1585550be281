//! Collision predicates for the ball
//!
//! Everything here is a pure function of positions so the step can evaluate
//! the ball's projected next position before committing to it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Paddle;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Approximate circle overlap: the circle's bounding square against the
    /// box, strict on every edge so grazing contact does not count.
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius > self.min.x
            && center.x - radius < self.max.x
            && center.y + radius > self.min.y
            && center.y - radius < self.max.y
    }
}

/// Ball would leave through the left or right edge
#[inline]
pub fn crosses_side_wall(next: Vec2, radius: f32, width: f32) -> bool {
    next.x > width - radius || next.x < radius
}

/// Ball would leave through the top edge
#[inline]
pub fn crosses_top_wall(next: Vec2, radius: f32) -> bool {
    next.y < radius
}

/// Ball would leave through the bottom edge (a miss)
#[inline]
pub fn crosses_bottom_wall(next: Vec2, radius: f32, height: f32) -> bool {
    next.y > height - radius
}

/// Ball's bottom edge moves from on/above the paddle top to below it while
/// the projected center is over the paddle.
pub fn crosses_paddle(pos: Vec2, next: Vec2, radius: f32, paddle: &Paddle) -> bool {
    let descending = next.y > pos.y;
    let was_above = pos.y + radius <= paddle.y;
    let now_below = next.y + radius > paddle.y;
    let over_paddle = next.x >= paddle.x && next.x <= paddle.x + paddle.width;
    descending && was_above && now_below && over_paddle
}

/// Where along the paddle the ball landed: -1 at the left edge, 0 at the
/// center, +1 at the right edge.
pub fn paddle_hit_offset(ball_x: f32, paddle: &Paddle) -> f32 {
    let half = paddle.width / 2.0;
    ((ball_x - paddle.center_x()) / half).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_circle_overlap() {
        let brick = Aabb::new(Vec2::new(35.0, 60.0), Vec2::new(115.0, 80.0));

        assert!(brick.overlaps_circle(Vec2::new(75.0, 70.0), 10.0));
        // Below the brick, bounding square just reaches in
        assert!(brick.overlaps_circle(Vec2::new(75.0, 89.0), 10.0));
        // Touching exactly is not an overlap
        assert!(!brick.overlaps_circle(Vec2::new(75.0, 90.0), 10.0));
        assert!(!brick.overlaps_circle(Vec2::new(25.0, 70.0), 10.0));
        assert!(!brick.overlaps_circle(Vec2::new(200.0, 70.0), 10.0));
    }

    #[test]
    fn test_walls() {
        assert!(crosses_side_wall(Vec2::new(791.0, 300.0), 10.0, 800.0));
        assert!(crosses_side_wall(Vec2::new(9.0, 300.0), 10.0, 800.0));
        assert!(!crosses_side_wall(Vec2::new(400.0, 300.0), 10.0, 800.0));

        assert!(crosses_top_wall(Vec2::new(400.0, 9.0), 10.0));
        assert!(!crosses_top_wall(Vec2::new(400.0, 10.0), 10.0));

        assert!(crosses_bottom_wall(Vec2::new(400.0, 591.0), 10.0, 600.0));
        assert!(!crosses_bottom_wall(Vec2::new(400.0, 590.0), 10.0, 600.0));
    }

    #[test]
    fn test_paddle_crossing() {
        let paddle = Paddle::new(&Tuning::default()); // x 350..450, top 570

        // Bottom edge 558 -> 562 stays above the paddle top
        assert!(!crosses_paddle(
            Vec2::new(400.0, 548.0),
            Vec2::new(404.0, 552.0),
            10.0,
            &paddle
        ));
        // Bottom edge 558 -> 572 crosses it
        assert!(crosses_paddle(
            Vec2::new(400.0, 548.0),
            Vec2::new(404.0, 562.0),
            10.0,
            &paddle
        ));
        // Moving up through the same band is not a hit
        assert!(!crosses_paddle(
            Vec2::new(404.0, 562.0),
            Vec2::new(400.0, 548.0),
            10.0,
            &paddle
        ));
        // Beside the paddle
        assert!(!crosses_paddle(
            Vec2::new(300.0, 548.0),
            Vec2::new(304.0, 562.0),
            10.0,
            &paddle
        ));
        // Already below the top edge
        assert!(!crosses_paddle(
            Vec2::new(400.0, 565.0),
            Vec2::new(404.0, 569.0),
            10.0,
            &paddle
        ));
    }

    #[test]
    fn test_hit_offset() {
        let paddle = Paddle::new(&Tuning::default());
        assert_eq!(paddle_hit_offset(400.0, &paddle), 0.0);
        assert_eq!(paddle_hit_offset(350.0, &paddle), -1.0);
        assert_eq!(paddle_hit_offset(450.0, &paddle), 1.0);
        assert_eq!(paddle_hit_offset(425.0, &paddle), 0.5);
        assert_eq!(paddle_hit_offset(900.0, &paddle), 1.0);
    }
}
