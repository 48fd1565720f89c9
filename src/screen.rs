use rand::Rng;

use crate::config::GameConfig;
use crate::grid::Direction;
use crate::highscore::HighScoreTable;
use crate::session::{GameSession, TickOutcome};
use crate::speed::TickClock;

/// A discrete key press, already mapped from the physical key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Confirm,
    Cancel,
    Quit,
    ShowScores,
    Steer(Direction),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub enum Screen {
    Menu,
    Playing(GameSession),
    Paused(GameSession),
    GameOver(GameSession),
    HighScores,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::Playing(_) => "playing",
            Screen::Paused(_) => "paused",
            Screen::GameOver(_) => "game over",
            Screen::HighScores => "high scores",
        }
    }
}

pub struct App<R> {
    config: GameConfig,
    screen: Screen,
    high_scores: HighScoreTable,
    rng: R,
    clock: TickClock,
}

impl<R: Rng> App<R> {
    pub fn new(config: GameConfig, high_scores: HighScoreTable, rng: R) -> Self {
        Self {
            config,
            screen: Screen::Menu,
            high_scores,
            rng,
            clock: TickClock::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn new_game(&mut self) -> Screen {
        self.clock.reset();
        log::info!("new game started");
        Screen::Playing(GameSession::new(self.config.grid_width, self.config.grid_height, &mut self.rng))
    }

    /// Routes one key press through the screen transitions.
    pub fn handle_input(&mut self, input: Input) -> Flow {
        let current = std::mem::replace(&mut self.screen, Screen::Menu);
        let from = std::mem::discriminant(&current);
        let from_name = current.name();
        let next = match (current, input) {
            (Screen::Menu, Input::Confirm) => self.new_game(),
            (Screen::Menu, Input::ShowScores) => Screen::HighScores,
            (Screen::Menu, Input::Quit) => {
                log::info!("quit from menu");
                return Flow::Exit;
            }
            (Screen::Playing(session), Input::Cancel) => Screen::Paused(session),
            (Screen::Playing(mut session), Input::Steer(direction)) => {
                session.steer(direction);
                Screen::Playing(session)
            }
            (Screen::Paused(session), Input::Cancel) => Screen::Playing(session),
            (Screen::Paused(_), Input::Quit) => Screen::Menu,
            (Screen::GameOver(_), Input::Confirm) => self.new_game(),
            (Screen::GameOver(_), Input::Quit) => Screen::Menu,
            (Screen::HighScores, Input::Cancel | Input::Quit) => Screen::Menu,
            (unchanged, _) => unchanged,
        };
        if std::mem::discriminant(&next) != from {
            log::debug!("screen {from_name} -> {}", next.name());
        }
        self.screen = next;
        Flow::Continue
    }

    /// Simulation ticks per second, only while a game is running.
    pub fn tick_rate(&self) -> Option<f32> {
        match &self.screen {
            Screen::Playing(session) => Some(session.speed().ticks_per_second()),
            _ => None,
        }
    }

    /// Feeds `dt` seconds of frame time; runs at most one simulation tick per
    /// call once a tick interval has accumulated. Returns whether a tick ran.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(rate) = self.tick_rate() else {
            return false;
        };
        if !self.clock.tick_due(dt, rate) {
            return false;
        }
        self.update();
        true
    }

    /// One simulation step. Does nothing outside of PLAYING.
    pub fn update(&mut self) {
        let Screen::Playing(session) = &mut self.screen else {
            return;
        };
        if session.tick(&mut self.rng) == TickOutcome::Alive {
            return;
        }

        let score = session.score();
        log::info!("game over: score {score}, level {}, length {}", session.level(), session.snake().len());
        self.high_scores.record(score);
        match self.high_scores.save(&self.config.high_score_path) {
            Ok(()) => log::info!("high scores saved to {}", self.config.high_score_path),
            Err(err) => log::error!("could not save high scores: {err:#}"),
        }

        if let Screen::Playing(session) = std::mem::replace(&mut self.screen, Screen::Menu) {
            self.screen = Screen::GameOver(session);
        }
    }
}
