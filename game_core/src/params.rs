/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 450.0;
    pub const PADDING: f32 = 10.0;
    pub const LINE_WIDTH: f32 = 10.0;
    pub const LINE_WIDTH_THIN: f32 = 5.0;
    pub const DASH_LENGTH: f32 = 20.0;

    // Paddle
    pub const PADDLE_LENGTH: f32 = 50.0;
    pub const PADDLE_X_POS: f32 = 30.0; // Inset from the goal edge
    pub const PADDLE_VELOCITY: f32 = 5.0; // px per tick

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 6.0; // px per tick

    // Match
    pub const WIN_SCORE: u8 = 10; // First to 10 wins
    pub const TICKS_PER_SECOND: u32 = 60;
}
