use hecs::World;

use crate::{Ball, Config, Field, Paddle, PaddleIntent};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, field: &Field, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * config.paddle_velocity;

            // Clamp to the field; an out-of-range move is a silent no-op
            paddle.y = field.clamp_paddle_y(paddle.y, config.paddle_length / 2.0);
        }
    }
}

/// Move ball along its direction components
///
/// Unconditional: bounds are enforced by the collision resolver earlier in
/// the same tick.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.dir * ball.speed;
    }
}
