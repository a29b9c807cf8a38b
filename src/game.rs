//! This module contains the main game logic and state.

use bevy_ecs::event::Events;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::world::World;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::RAW_BOARD;
use crate::error::GameResult;
use crate::events::{GameEvent, Intent};
use crate::formatter;
use crate::map::parser::{LevelParser, ParsedLevel};
use crate::snapshot::Snapshot;
use crate::systems::{
    enemy_ai_system, enemy_contact_system, is_playing, item_collection_system, player_control_system, player_movement_system,
    power_up_timer_system, reset_session, restart_system, win_condition_system, GamePhase, GameRng, GlobalState, PlayerLives,
    ScoreResource,
};

/// System sets, in the order they run each tick.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum TickSet {
    /// Intent processing and restarts; runs in every phase.
    Input,
    /// Movement, collection, AI and contact resolution; only while playing.
    Gameplay,
}

/// Core simulation state built on the Bevy ECS architecture.
///
/// A `World` holds every entity and resource, while a `Schedule` runs the systems in a fixed
/// order once per tick. Everything is single-threaded and driven by whoever calls [`Game::tick`].
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds a game on the built-in board, seeded as configured.
    pub fn new(config: &Config) -> GameResult<Game> {
        let rng = match config.seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_os(),
        };
        Self::with_rng(&RAW_BOARD, rng)
    }

    /// Builds a game on an arbitrary board with a fixed seed.
    pub fn from_board<S: AsRef<str>>(raw_board: &[S], seed: u64) -> GameResult<Game> {
        Self::with_rng(raw_board, GameRng::seeded(seed))
    }

    /// Decodes `raw_board`, spawns it, and prepares the tick schedule.
    ///
    /// # Errors
    ///
    /// Returns `GameError::MapParse` if the board is empty or not rectangular.
    pub fn with_rng<S: AsRef<str>>(raw_board: &[S], rng: GameRng) -> GameResult<Game> {
        let level = LevelParser::parse_board(raw_board)?;
        info!(size = %level.size(), "Board decoded");

        let mut world = World::default();
        Self::insert_resources(&mut world, level, rng);
        reset_session(&mut world);

        let mut schedule = Schedule::default();
        Self::configure_schedule(&mut schedule);

        Ok(Game { world, schedule })
    }

    fn insert_resources(world: &mut World, level: ParsedLevel, rng: GameRng) {
        world.init_resource::<Events<GameEvent>>();
        world.insert_resource(level);
        world.insert_resource(rng);
        world.insert_resource(GlobalState::default());
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.configure_sets((TickSet::Input, TickSet::Gameplay.run_if(is_playing)).chain());

        schedule.add_systems((
            (player_control_system, restart_system).chain().in_set(TickSet::Input),
            (
                player_movement_system,
                item_collection_system,
                power_up_timer_system,
                enemy_ai_system,
                enemy_contact_system,
                win_condition_system,
            )
                .chain()
                .in_set(TickSet::Gameplay),
        ));
    }

    /// Executes one simulation tick with the given intents.
    ///
    /// Intents are applied in order. Returns `true` once a Quit intent has been seen.
    pub fn tick(&mut self, intents: &[Intent]) -> bool {
        formatter::increment_tick();

        {
            let mut events = self.world.resource_mut::<Events<GameEvent>>();
            events.update();
            for intent in intents {
                events.send(GameEvent::from(*intent));
            }
        }

        let before = self.phase();
        self.schedule.run(&mut self.world);
        let after = self.phase();
        if before != after {
            info!(from = %before, to = %after, score = self.score(), "Phase changed");
        }

        let exit = self.world.resource::<GlobalState>().exit;
        if exit {
            debug!("Tick finished with exit requested");
        }
        exit
    }

    pub fn phase(&self) -> GamePhase {
        *self.world.resource::<GamePhase>()
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<ScoreResource>().0
    }

    pub fn lives(&self) -> u8 {
        self.world.resource::<PlayerLives>().0
    }

    pub fn snapshot(&mut self) -> Snapshot {
        Snapshot::capture(&mut self.world)
    }
}
