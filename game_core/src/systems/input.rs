use hecs::World;

use crate::{InputQueue, Paddle, PaddleIntent};

/// Apply queued per-player inputs to paddle intents
pub fn ingest_inputs(world: &mut World, inputs: &mut InputQueue) {
    for i in 0..inputs.inputs.len() {
        let (player_id, dir) = inputs.inputs[i];
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.player_id == player_id {
                intent.dir = dir;
            }
        }
    }

    // Clear processed inputs
    inputs.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_inputs_reach_the_right_paddle() {
        let mut world = World::new();
        create_paddle(&mut world, 0, 225.0);
        create_paddle(&mut world, 1, 225.0);

        let mut inputs = InputQueue::new();
        inputs.push_input(0, -1);
        inputs.push_input(1, 1);

        ingest_inputs(&mut world, &mut inputs);

        for (_e, (paddle, intent)) in world.query_mut::<(&Paddle, &PaddleIntent)>() {
            let expected = if paddle.player_id == 0 { -1 } else { 1 };
            assert_eq!(intent.dir, expected);
        }
        assert!(inputs.inputs.is_empty(), "Queue drains after ingest");
    }

    #[test]
    fn test_latest_input_wins() {
        let mut world = World::new();
        create_paddle(&mut world, 0, 225.0);

        let mut inputs = InputQueue::new();
        inputs.push_input(0, -1);
        inputs.push_input(0, 0);

        ingest_inputs(&mut world, &mut inputs);

        for (_e, intent) in world.query_mut::<&PaddleIntent>() {
            assert_eq!(intent.dir, 0);
        }
    }
}
