use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
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

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// Play-field geometry: outer dimensions plus the border bars that bound
/// vertical movement. The goal edges are the left and right window edges.
#[derive(Debug, Clone)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    padding: f32,
    border: f32,
}

impl Field {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
            padding: config.padding,
            border: config.line_width,
        }
    }

    /// Inner edge of the top border bar
    pub fn top_bound(&self) -> f32 {
        self.padding + self.border
    }

    /// Inner edge of the bottom border bar
    pub fn bottom_bound(&self) -> f32 {
        self.height - self.padding - self.border
    }

    /// Clamp a paddle center Y so the whole paddle stays between the borders
    pub fn clamp_paddle_y(&self, y: f32, half_length: f32) -> f32 {
        y.clamp(self.top_bound() + half_length, self.bottom_bound() - half_length)
    }

    /// Reset anchor for the ball
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddles start vertically centered
    pub fn paddle_spawn_y(&self) -> f32 {
        self.height / 2.0
    }
}
