//! Sources of player intents for the headless driver.

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, info};

use crate::events::Intent;
use crate::map::direction::Direction;
use crate::snapshot::Snapshot;

pub type Intents = SmallVec<[Intent; 2]>;

/// Anything that can drive the player: a keyboard mapping, a replay, a bot.
pub trait IntentSource {
    /// Returns the intents for the next tick, given the state after the last one.
    fn next_intents(&mut self, snapshot: &Snapshot) -> Intents;
}

/// Shortest and longest stretch the autopilot holds one heading, in ticks.
const HOLD_TICKS: (u32, u32) = (10, 45);

/// A random walker that keeps the session going on its own.
///
/// It turns every so often, restarts finished sessions while it has restarts left, and quits after that.
pub struct Autopilot {
    rng: SmallRng,
    restarts_left: u32,
    hold: u32,
    heading: Option<Direction>,
}

impl Autopilot {
    pub fn new(seed: Option<u64>, restarts: u32) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
            None => SmallRng::from_os_rng(),
        };
        Self {
            rng,
            restarts_left: restarts,
            hold: 0,
            heading: None,
        }
    }

    fn steer(&mut self) -> Intents {
        if self.hold > 0 {
            self.hold -= 1;
            return SmallVec::new();
        }

        self.hold = self.rng.random_range(HOLD_TICKS.0..=HOLD_TICKS.1);
        let options: SmallVec<[Direction; 4]> = Direction::DIRECTIONS
            .into_iter()
            .filter(|direction| Some(*direction) != self.heading)
            .collect();

        match options.choose(&mut self.rng).copied() {
            Some(direction) => {
                self.heading = Some(direction);
                smallvec![Intent::Move(direction)]
            }
            None => SmallVec::new(),
        }
    }
}

impl IntentSource for Autopilot {
    fn next_intents(&mut self, snapshot: &Snapshot) -> Intents {
        if !snapshot.phase.is_over() {
            return self.steer();
        }

        if self.restarts_left > 0 {
            self.restarts_left -= 1;
            self.heading = None;
            self.hold = 0;
            debug!(restarts_left = self.restarts_left, "Autopilot restarting");
            smallvec![Intent::Restart]
        } else {
            info!(phase = %snapshot.phase, score = snapshot.score, "Autopilot done");
            smallvec![Intent::Quit]
        }
    }
}
