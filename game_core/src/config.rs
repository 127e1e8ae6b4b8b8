use crate::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub padding: f32,
    pub line_width: f32,
    pub line_width_thin: f32,
    pub dash_length: f32,
    pub paddle_length: f32,
    pub paddle_x_pos: f32,
    pub paddle_velocity: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            padding: Params::PADDING,
            line_width: Params::LINE_WIDTH,
            line_width_thin: Params::LINE_WIDTH_THIN,
            dash_length: Params::DASH_LENGTH,
            paddle_length: Params::PADDLE_LENGTH,
            paddle_x_pos: Params::PADDLE_X_POS,
            paddle_velocity: Params::PADDLE_VELOCITY,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_x_pos // Left paddle
        } else {
            self.field_width - self.paddle_x_pos // Right paddle
        }
    }
}
