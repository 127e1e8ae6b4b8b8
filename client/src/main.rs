//! A classic two-player Pong game.
//!
//! The simulation lives in `game_core`; this binary owns the window, folds
//! key events into a held-input state and draws the field each frame.

use ggez::conf;
use ggez::event::{self, EventHandler, KeyCode, KeyMods};
use ggez::graphics::{self, DrawMode, DrawParam, Mesh, MeshBuilder, Rect, Text};
use ggez::nalgebra as na;
use ggez::timer;
use ggez::{Context, ContextBuilder, GameResult};

use std::time::{SystemTime, UNIX_EPOCH};

use game_core::{Config, Match, MatchState, Params};

type Point2 = na::Point2<f32>;

const DESIRED_FPS: u32 = Params::TICKS_PER_SECOND;

const BORDER_COLOR: graphics::Color = graphics::Color {
    r: 200.0 / 255.0,
    g: 200.0 / 255.0,
    b: 200.0 / 255.0,
    a: 1.0,
};

const SCORE_SCALE: f32 = 48.0;
const OVERLAY_SCALE: f32 = 32.0;

/// **********************************************************************
/// The `InputState` turns keyboard events into something state-based, so
/// the simulation can ask "which direction is held right now" each tick.
/// **********************************************************************
#[derive(Debug, Default)]
struct InputState {
    left_up: bool,
    left_down: bool,
    right_up: bool,
    right_down: bool,
}

impl InputState {
    fn dir(up: bool, down: bool) -> i8 {
        match (up, down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

fn side_name(player_id: u8) -> &'static str {
    if player_id == 0 {
        "LEFT"
    } else {
        "RIGHT"
    }
}

/// **********************************************************************
/// `MainState` is the game's "global" state: the running match, the held
/// input, and the meshes the field is drawn from.
/// **********************************************************************
struct MainState {
    game: Match,
    input: InputState,
    font: graphics::Font,
    field_mesh: Mesh,
    paddle_mesh: Mesh,
    ball_mesh: Mesh,
}

impl MainState {
    fn new(ctx: &mut Context) -> GameResult<MainState> {
        let config = Config::new();

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let field_mesh = build_field_mesh(ctx, &config)?;
        let paddle_mesh = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(
                -config.line_width / 2.0,
                -config.paddle_length / 2.0,
                config.line_width,
                config.paddle_length,
            ),
            graphics::WHITE,
        )?;
        let ball_mesh = Mesh::new_circle(
            ctx,
            DrawMode::fill(),
            Point2::new(0.0, 0.0),
            config.ball_radius,
            0.5,
            graphics::WHITE,
        )?;

        Ok(MainState {
            game: Match::new(config, seed),
            input: InputState::default(),
            font: graphics::Font::default(),
            field_mesh,
            paddle_mesh,
            ball_mesh,
        })
    }

    fn draw_scores(&mut self, ctx: &mut Context) -> GameResult {
        let left = Text::new((format!("{}", self.game.score.left), self.font, SCORE_SCALE));
        let right = Text::new((format!("{}", self.game.score.right), self.font, SCORE_SCALE));

        let config = &self.game.config;
        let y = config.padding + config.line_width + 15.0;
        let left_x = config.field_width / 4.0 - left.width(ctx) as f32 / 2.0;
        let right_x = 3.0 * config.field_width / 4.0 - right.width(ctx) as f32 / 2.0;

        graphics::draw(ctx, &left, (Point2::new(left_x, y), 0.0, graphics::WHITE))?;
        graphics::draw(ctx, &right, (Point2::new(right_x, y), 0.0, graphics::WHITE))?;
        Ok(())
    }

    fn draw_overlay(&mut self, ctx: &mut Context) -> GameResult {
        let lines: Vec<String> = match self.game.state() {
            MatchState::WaitingToStart => vec!["PRESS ANY KEY TO SERVE".to_string()],
            MatchState::GameOver => {
                let winner = self.game.winner().unwrap_or(0);
                vec![
                    "GAME OVER".to_string(),
                    format!("{} PLAYER WINS", side_name(winner)),
                    "PRESS ANY KEY FOR A NEW MATCH".to_string(),
                ]
            }
            _ => return Ok(()),
        };

        // Below the center so the resting ball stays visible
        let field_width = self.game.config.field_width;
        let mut y = self.game.config.field_height / 2.0 + 50.0;
        for line in lines {
            let text = Text::new((line, self.font, OVERLAY_SCALE));
            let x = (field_width - text.width(ctx) as f32) / 2.0;
            graphics::draw(ctx, &text, (Point2::new(x, y), 0.0, graphics::WHITE))?;
            y += OVERLAY_SCALE + 8.0;
        }
        Ok(())
    }
}

/// Static parts of the field: the border bars and the dashed center line
fn build_field_mesh(ctx: &mut Context, config: &Config) -> GameResult<Mesh> {
    let mut mb = MeshBuilder::new();

    mb.rectangle(
        DrawMode::fill(),
        Rect::new(0.0, config.padding, config.field_width, config.line_width),
        BORDER_COLOR,
    );
    mb.rectangle(
        DrawMode::fill(),
        Rect::new(
            0.0,
            config.field_height - config.padding - config.line_width,
            config.field_width,
            config.line_width,
        ),
        BORDER_COLOR,
    );

    // Dashed center line, clipped to the bottom padding
    let x = (config.field_width - config.line_width) / 2.0;
    let max_y = config.field_height - config.padding;
    let mut y = config.padding;
    while y < max_y {
        let dash_end = (y + config.dash_length).min(max_y);
        mb.rectangle(
            DrawMode::fill(),
            Rect::new(x, y, config.line_width_thin, dash_end - y),
            BORDER_COLOR,
        );
        y += 2.0 * config.dash_length;
    }

    mb.build(ctx)
}

/// **********************************************************************
/// The `EventHandler` trait from `ggez::event` provides the callbacks for
/// updating and drawing the game and for handling input events.
/// **********************************************************************
impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while timer::check_update_time(ctx, DESIRED_FPS) {
            if self.game.state() != MatchState::Playing {
                continue;
            }

            self.game
                .push_input(0, InputState::dir(self.input.left_up, self.input.left_down));
            self.game
                .push_input(1, InputState::dir(self.input.right_up, self.input.right_down));
            self.game.tick();

            if self.game.events.left_scored {
                log::info!(
                    "left player scores ({} - {})",
                    self.game.score.left,
                    self.game.score.right
                );
            }
            if self.game.events.right_scored {
                log::info!(
                    "right player scores ({} - {})",
                    self.game.score.left,
                    self.game.score.right
                );
            }
            if self.game.state() == MatchState::GameOver {
                if let Some(winner) = self.game.winner() {
                    log::info!("game over, {} player wins", side_name(winner));
                }
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, graphics::BLACK);

        graphics::draw(ctx, &self.field_mesh, DrawParam::default())?;

        for player_id in [0u8, 1] {
            let dest = Point2::new(
                self.game.config.paddle_x(player_id),
                self.game.paddle_y(player_id),
            );
            graphics::draw(ctx, &self.paddle_mesh, DrawParam::default().dest(dest))?;
        }

        let ball = self.game.ball_pos();
        graphics::draw(
            ctx,
            &self.ball_mesh,
            DrawParam::default().dest(Point2::new(ball.x, ball.y)),
        )?;

        self.draw_scores(ctx)?;
        self.draw_overlay(ctx)?;

        graphics::present(ctx)?;

        // And yield the timeslice until the next frame
        timer::yield_now();
        Ok(())
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        keycode: KeyCode,
        _keymod: KeyMods,
        _repeat: bool,
    ) {
        if keycode == KeyCode::Escape {
            event::quit(ctx);
            return;
        }

        match keycode {
            KeyCode::W => self.input.left_up = true,
            KeyCode::S => self.input.left_down = true,
            KeyCode::Up => self.input.right_up = true,
            KeyCode::Down => self.input.right_down = true,
            _ => (),
        }

        // Any key serves the opening ball or starts the next match
        match self.game.state() {
            MatchState::WaitingToStart => {
                self.game.start();
                log::info!("serve, first to {} wins", self.game.config.win_score);
            }
            MatchState::GameOver => self.game.restart(),
            _ => (),
        }
    }

    fn key_up_event(&mut self, _ctx: &mut Context, keycode: KeyCode, _keymod: KeyMods) {
        match keycode {
            KeyCode::W => self.input.left_up = false,
            KeyCode::S => self.input.left_down = false,
            KeyCode::Up => self.input.right_up = false,
            KeyCode::Down => self.input.right_down = false,
            _ => (),
        }
    }
}

fn print_instructions() {
    println!();
    println!("Welcome to PONG!");
    println!();
    println!("How to play:");
    println!("Left player: W/S. Right player: Up/Down arrows.");
    println!("Any key serves; Escape quits.");
    println!();
}

pub fn main() -> GameResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    print_instructions();

    let cb = ContextBuilder::new("pong", "pong")
        .window_setup(conf::WindowSetup::default().title("Pong"))
        .window_mode(
            conf::WindowMode::default().dimensions(Params::FIELD_WIDTH, Params::FIELD_HEIGHT),
        );

    let (ctx, events_loop) = &mut cb.build()?;

    let game = &mut MainState::new(ctx)?;
    event::run(ctx, events_loop, game)
}
