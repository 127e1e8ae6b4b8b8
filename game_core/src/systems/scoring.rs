use hecs::World;

use crate::{Ball, Events, Field, Score};

/// Check if the ball crossed a goal edge (scoring)
///
/// Only detects and tallies; the caller restarts the ball (or ends the
/// match) before the next tick, so a crossing counts exactly once.
pub fn check_scoring(world: &mut World, field: &Field, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&Ball>() {
        if ball.pos.x <= 0.0 {
            // Left side conceded
            score.increment_right();
            events.right_scored = true;
        } else if ball.pos.x >= field.width {
            // Right side conceded
            score.increment_left();
            events.left_scored = true;
        }
    }
}
