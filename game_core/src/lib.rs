pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the Pong simulation
pub fn step(
    world: &mut World,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    inputs: &mut InputQueue,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest held inputs (apply to paddle intents)
    ingest_inputs(world, inputs);

    // 2. Move paddles based on intents, clamped to the field
    move_paddles(world, field, config);

    // 3. Resolve collisions before integrating (borders, then paddles)
    resolve_wall_collisions(world, field, config, events);
    resolve_paddle_collisions(world, config, events);

    // 4. Integrate ball position
    move_ball(world);

    // 5. Check scoring (ball crossed a goal edge)
    check_scoring(world, field, score, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new()))
}

/// Helper to create the ball entity, initially at rest
pub fn create_ball(world: &mut World, pos: glam::Vec2, speed: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, glam::Vec2::ZERO, speed),))
}
