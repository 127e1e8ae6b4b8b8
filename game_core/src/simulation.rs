use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, Field, GameRng, InputQueue,
    MatchAction, MatchFsm, MatchState, Paddle, Score,
};

/// One play session, from the first serve until a player reaches the win
/// score.
///
/// Owns every piece of per-match state explicitly. The frontend queues the
/// held input directions each tick and reads positions and scores back for
/// drawing.
pub struct Match {
    pub world: World,
    pub config: Config,
    pub field: Field,
    pub score: Score,
    pub events: Events,
    pub inputs: InputQueue,
    pub rng: GameRng,
    pub fsm: MatchFsm,
}

impl Match {
    pub fn new(config: Config, seed: u64) -> Self {
        let field = Field::new(&config);
        let mut world = World::new();

        let spawn_y = field.paddle_spawn_y();
        create_paddle(&mut world, 0, spawn_y);
        create_paddle(&mut world, 1, spawn_y);

        // The ball sits on its anchor until the first serve
        create_ball(&mut world, field.ball_spawn(), config.ball_speed);

        Self {
            world,
            config,
            field,
            score: Score::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
            rng: GameRng::new(seed),
            fsm: MatchFsm::new(),
        }
    }

    /// Serve the opening ball and enter play
    ///
    /// The opening serve direction is a coin flip; every later serve goes
    /// toward the side that conceded the point.
    pub fn start(&mut self) {
        if !self.fsm.transition(MatchAction::Start) {
            return;
        }
        let direction = if self.rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.restart_ball(direction);
    }

    /// Queue a held-input direction for a player (-1 = up, 0 = stop, 1 = down)
    pub fn push_input(&mut self, player_id: u8, dir: i8) {
        self.inputs.push_input(player_id, dir);
    }

    /// Advance the simulation one fixed tick
    ///
    /// Outside of play this is a no-op; a point is resolved in the same
    /// call, either restarting the ball or ending the match.
    pub fn tick(&mut self) {
        if !self.fsm.is_playing() {
            return;
        }

        step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.inputs,
        );

        if self.events.left_scored || self.events.right_scored {
            self.fsm.transition(MatchAction::Scored);
            self.resolve_point();
        }
    }

    fn resolve_point(&mut self) {
        if self.score.has_winner(self.config.win_score).is_some() {
            self.fsm.transition(MatchAction::Win);
        } else {
            // Serve toward the side that was scored against
            let direction = if self.events.right_scored { -1.0 } else { 1.0 };
            self.restart_ball(direction);
            self.fsm.transition(MatchAction::Continue);
        }
    }

    /// Tear a finished match down into a fresh one awaiting a key press
    pub fn restart(&mut self) {
        if !self.fsm.transition(MatchAction::Restart) {
            return;
        }

        self.score = Score::new();
        self.events.clear();
        self.inputs.clear();

        let spawn_y = self.field.paddle_spawn_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = spawn_y;
        }

        let anchor = self.field.ball_spawn();
        let speed = self.config.ball_speed;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = anchor;
            ball.dir = Vec2::ZERO;
            ball.speed = speed;
        }
    }

    fn restart_ball(&mut self, direction: f32) {
        let anchor = self.field.ball_spawn();
        let speed = self.config.ball_speed;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.restart(direction, anchor, speed);
        }
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn winner(&self) -> Option<u8> {
        self.score.has_winner(self.config.win_score)
    }

    /// Ball position, for drawing
    pub fn ball_pos(&self) -> Vec2 {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.pos)
            .unwrap_or_else(|| self.field.ball_spawn())
    }

    /// Paddle center Y for a player, for drawing
    pub fn paddle_y(&self, player_id: u8) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.player_id == player_id)
            .map(|(_e, p)| p.y)
            .unwrap_or_else(|| self.field.paddle_spawn_y())
    }
}
