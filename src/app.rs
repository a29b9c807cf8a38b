use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::Config;
use crate::constants::LOOP_TIME;
use crate::error::GameResult;
use crate::game::Game;
use crate::input::{Autopilot, IntentSource};

/// Runs a [`Game`] at the fixed tick rate, feeding it from an [`IntentSource`].
pub struct App {
    pub game: Game,
    source: Box<dyn IntentSource>,
    realtime: bool,
    max_ticks: Option<u64>,
    ticks: u64,
}

impl App {
    /// Builds the game on the built-in board, driven by the autopilot.
    pub fn new(config: &Config) -> GameResult<Self> {
        let game = Game::new(config)?;
        let source = Box::new(Autopilot::new(config.seed, config.restarts));
        Ok(Self::with_source(game, source, config))
    }

    pub fn with_source(game: Game, source: Box<dyn IntentSource>, config: &Config) -> Self {
        Self {
            game,
            source,
            realtime: config.realtime,
            max_ticks: config.max_ticks,
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs until the source quits or the tick limit is reached.
    pub fn run(&mut self) {
        info!(realtime = self.realtime, max_ticks = ?self.max_ticks, "Starting game loop");
        while self.run_tick() {}
        info!(ticks = self.ticks, score = self.game.score(), phase = %self.game.phase(), "Game loop finished");
    }

    /// Runs one tick. Returns `false` once the loop should stop.
    pub fn run_tick(&mut self) -> bool {
        let start = Instant::now();

        let snapshot = self.game.snapshot();
        let intents = self.source.next_intents(&snapshot);
        let exit = self.game.tick(&intents);
        self.ticks += 1;

        if self.realtime {
            let elapsed = start.elapsed();
            if elapsed < LOOP_TIME {
                let time = LOOP_TIME.saturating_sub(elapsed);
                if time != Duration::ZERO {
                    spin_sleep::sleep(time);
                }
            } else {
                warn!(behind = ?(elapsed - LOOP_TIME), "Game loop behind schedule");
            }
        }

        if exit {
            return false;
        }
        !self.max_ticks.is_some_and(|max| self.ticks >= max)
    }
}
