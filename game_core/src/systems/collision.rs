use glam::Vec2;
use hecs::World;

use crate::field::Aabb;
use crate::{Ball, Config, Events, Field, Paddle};

/// Bounce the ball off the top and bottom borders
///
/// The response forces the sign of `dir.y` instead of negating it, so a
/// ball still overlapping a border on the next tick cannot bounce itself
/// back in. Both checks run every tick, independently.
pub fn resolve_wall_collisions(
    world: &mut World,
    field: &Field,
    config: &Config,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y + config.ball_radius >= field.bottom_bound() {
            ball.dir.y = -ball.dir.y.abs();
            events.ball_hit_wall = true;
        }
        if ball.pos.y - config.ball_radius <= field.top_bound() {
            ball.dir.y = ball.dir.y.abs();
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off paddles, deflecting it by the contact offset
pub fn resolve_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<(u8, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(player_id, paddle_y) in &paddles {
            let paddle_box = Aabb::from_center_size(
                Vec2::new(config.paddle_x(player_id), paddle_y),
                Vec2::new(config.line_width, config.paddle_length),
            );
            if !paddle_box.intersects_circle(ball.pos, config.ball_radius) {
                continue;
            }

            // Always away from the paddle that was hit
            ball.dir.x = if player_id == 0 { 1.0 } else { -1.0 };

            // Deflection grows linearly with the offset from the paddle
            // center: zero at dead center, ±1 at the edges
            let half_length = config.paddle_length / 2.0;
            ball.dir.y = ((ball.pos.y - paddle_y) / half_length).clamp(-1.0, 1.0);

            events.ball_hit_paddle = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Config, Field, Events) {
        let config = Config::new();
        let field = Field::new(&config);
        let world = World::new();
        let events = Events::new();
        (world, config, field, events)
    }

    fn set_ball(world: &mut World, pos: Vec2, dir: Vec2) {
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.dir = dir;
        }
    }

    fn ball_dir(world: &World) -> Vec2 {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.dir)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_up_off_bottom_border() {
        let (mut world, config, field, mut events) = setup();
        create_ball(&mut world, Vec2::ZERO, config.ball_speed);
        set_ball(
            &mut world,
            Vec2::new(400.0, field.bottom_bound() - config.ball_radius + 1.0),
            Vec2::new(1.0, 0.8),
        );

        resolve_wall_collisions(&mut world, &field, &config, &mut events);

        let dir = ball_dir(&world);
        assert!(dir.y < 0.0, "Ball should bounce up off the bottom border");
        assert_eq!(dir.x, 1.0, "Horizontal direction unchanged");
        assert!(events.ball_hit_wall, "Should flag ball_hit_wall");
    }

    #[test]
    fn test_ball_bounces_down_off_top_border() {
        let (mut world, config, field, mut events) = setup();
        create_ball(&mut world, Vec2::ZERO, config.ball_speed);
        set_ball(
            &mut world,
            Vec2::new(400.0, field.top_bound() + config.ball_radius - 1.0),
            Vec2::new(-1.0, -0.8),
        );

        resolve_wall_collisions(&mut world, &field, &config, &mut events);

        let dir = ball_dir(&world);
        assert!(dir.y > 0.0, "Ball should bounce down off the top border");
        assert_eq!(dir.x, -1.0, "Horizontal direction unchanged");
        assert!(events.ball_hit_wall, "Should flag ball_hit_wall");
    }

    #[test]
    fn test_wall_bounce_does_not_retrigger() {
        let (mut world, config, field, mut events) = setup();
        create_ball(&mut world, Vec2::ZERO, config.ball_speed);
        set_ball(
            &mut world,
            Vec2::new(400.0, field.bottom_bound() - config.ball_radius + 1.0),
            Vec2::new(1.0, 0.8),
        );

        // A second resolve on the still-overlapping ball keeps it outbound
        resolve_wall_collisions(&mut world, &field, &config, &mut events);
        resolve_wall_collisions(&mut world, &field, &config, &mut events);

        assert!(ball_dir(&world).y < 0.0, "Sign forcing is idempotent");
    }

    #[test]
    fn test_left_paddle_sends_ball_right() {
        let (mut world, config, _field, mut events) = setup();
        let paddle_y = 225.0;
        create_paddle(&mut world, 0, paddle_y);
        create_ball(&mut world, Vec2::ZERO, config.ball_speed);
        set_ball(
            &mut world,
            Vec2::new(config.paddle_x(0) + config.line_width / 2.0, paddle_y),
            Vec2::new(-1.0, 0.3),
        );

        resolve_paddle_collisions(&mut world, &config, &mut events);

        let dir = ball_dir(&world);
        assert_eq!(dir.x, 1.0, "Ball should leave the left paddle rightward");
        assert!(events.ball_hit_paddle, "Should flag ball_hit_paddle");
    }

    #[test]
    fn test_right_paddle_sends_ball_left() {
        let (mut world, config, _field, mut events) = setup();
        let paddle_y = 225.0;
        create_paddle(&mut world, 1, paddle_y);
        create_ball(&mut world, Vec2::ZERO, config.ball_speed);
        set_ball(
            &mut world,
            Vec2::new(config.paddle_x(1) - config.line_width / 2.0, paddle_y),
            Vec2::new(1.0, -0.3),
        );

        resolve_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(
            ball_dir(&world).x,
            -1.0,
            "Ball should leave the right paddle leftward"
        );
    }

    #[test]
    fn test_dead_center_hit_has_no_deflection() {
        let (mut world, config, _field, mut events) = setup();
        let paddle_y = 225.0;
        create_paddle(&mut world, 0, paddle_y);
        create_ball(&mut world, Vec2::ZERO, config.ball_speed);
        set_ball(
            &mut world,
            Vec2::new(config.paddle_x(0), paddle_y),
            Vec2::new(-1.0, 0.9),
        );

        resolve_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_dir(&world).y, 0.0, "Center hit goes straight back");
    }

    #[test]
    fn test_edge_hit_deflects_toward_the_edge() {
        let (mut world, config, _field, mut events) = setup();
        let paddle_y = 225.0;
        let half_length = config.paddle_length / 2.0;
        create_paddle(&mut world, 0, paddle_y);
        create_ball(&mut world, Vec2::ZERO, config.ball_speed);

        // Contact near the top edge of the paddle deflects upward
        set_ball(
            &mut world,
            Vec2::new(config.paddle_x(0), paddle_y - half_length + 2.0),
            Vec2::new(-1.0, 0.0),
        );
        resolve_paddle_collisions(&mut world, &config, &mut events);
        let up = ball_dir(&world).y;
        assert!(up < 0.0, "Top-edge contact deflects upward");

        // Contact near the bottom edge deflects downward, symmetrically
        set_ball(
            &mut world,
            Vec2::new(config.paddle_x(0), paddle_y + half_length - 2.0),
            Vec2::new(-1.0, 0.0),
        );
        resolve_paddle_collisions(&mut world, &config, &mut events);
        let down = ball_dir(&world).y;
        assert!(down > 0.0, "Bottom-edge contact deflects downward");
        assert!((up + down).abs() < 1e-6, "Deflection is symmetric");
    }

    #[test]
    fn test_deflection_never_exceeds_unit() {
        let (mut world, config, _field, mut events) = setup();
        let paddle_y = 225.0;
        create_paddle(&mut world, 0, paddle_y);
        create_ball(&mut world, Vec2::ZERO, config.ball_speed);

        // Graze the very corner of the thickened contact region
        set_ball(
            &mut world,
            Vec2::new(
                config.paddle_x(0),
                paddle_y + config.paddle_length / 2.0 + config.ball_radius - 1.0,
            ),
            Vec2::new(-1.0, 0.0),
        );
        resolve_paddle_collisions(&mut world, &config, &mut events);

        let dir = ball_dir(&world);
        assert!(dir.y <= 1.0, "Deflection is clamped to the unit range");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_no_contact_leaves_ball_alone() {
        let (mut world, config, _field, mut events) = setup();
        create_paddle(&mut world, 0, 225.0);
        create_ball(&mut world, Vec2::ZERO, config.ball_speed);
        set_ball(&mut world, Vec2::new(400.0, 225.0), Vec2::new(-1.0, 0.4));

        resolve_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_dir(&world), Vec2::new(-1.0, 0.4));
        assert!(!events.ball_hit_paddle);
    }
}
