use glam::Vec2;

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub y: f32,        // Vertical center, clamped to the field
}

impl Paddle {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self { player_id, y }
    }
}

/// Ball component - the pong ball
///
/// Speed is a scalar; `dir` holds the per-axis direction components that
/// scale the step. While in play `dir.x` is ±1 and `dir.y` stays in
/// [-1, 1], so the ball always crosses the field at full horizontal speed.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, dir: Vec2, speed: f32) -> Self {
        Self { pos, dir, speed }
    }

    /// Put the ball back on the anchor, serving horizontally toward
    /// `direction` (±1) at the base speed.
    pub fn restart(&mut self, direction: f32, anchor: Vec2, speed: f32) {
        self.pos = anchor;
        self.dir = Vec2::new(direction.signum(), 0.0);
        self.speed = speed;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_restart_places_ball_on_anchor() {
        let mut ball = Ball::new(Vec2::new(123.0, 45.0), Vec2::new(-1.0, 0.7), 9.5);
        let anchor = Vec2::new(400.0, 225.0);

        ball.restart(1.0, anchor, 6.0);

        assert_eq!(ball.pos, anchor, "Ball should sit exactly on the anchor");
        assert_eq!(ball.dir, Vec2::new(1.0, 0.0), "Serve is horizontal");
        assert_eq!(ball.speed, 6.0, "Speed resets to the base value");
    }

    #[test]
    fn test_ball_restart_direction_sign() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 6.0);
        ball.restart(-1.0, Vec2::ZERO, 6.0);
        assert_eq!(ball.dir.x, -1.0);
        assert_eq!(ball.dir.y, 0.0);
    }
}
