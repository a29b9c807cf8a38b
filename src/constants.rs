//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{IVec2, Vec2};

/// The fixed simulation rate, in ticks per second.
pub const TICKS_PER_SECOND: u32 = 60;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / TICKS_PER_SECOND as f64) as u64);

/// The size of each tile, in pixels.
pub const TILE_SIZE: f32 = 40.0;

/// The total margin reserved around the board for UI chrome, in pixels.
pub const BOARD_MARGIN: f32 = 500.0;
/// The offset of the board from the top-left corner of the window, in pixels.
pub const BOARD_PIXEL_OFFSET: Vec2 = Vec2::new(BOARD_MARGIN / 2.0, BOARD_MARGIN / 2.0);

/// Where the player starts when the board has no `P`.
pub const DEFAULT_PLAYER_START: IVec2 = IVec2::new(1, 1);

/// Player speed, in pixels per tick.
pub const PLAYER_SPEED: f32 = 4.0;
/// Enemy speed while pursuing, in pixels per tick. Evasion moves at half of this.
pub const ENEMY_SPEED: f32 = 2.0;

pub const STARTING_LIVES: u8 = 3;

/// Ticks an enemy must wait between two pursuit decisions.
pub const DECISION_COOLDOWN_TICKS: u32 = 15;

/// How long a power-up keeps enemies vulnerable, in ticks.
pub const POWER_UP_DURATION_TICKS: u32 = 8 * TICKS_PER_SECOND;

pub mod score {
    pub const PICKUP: u32 = 10;
    pub const POWER_UP: u32 = 50;
    pub const ENEMY_EATEN: u32 = 200;
}

/// Box sizes and their placement within a tile.
pub mod collider {
    use glam::Vec2;

    use super::TILE_SIZE;

    /// Movable actors are drawn slightly smaller than a tile so they fit through corridors.
    pub const ACTOR_INSET: f32 = 2.0;
    pub const ACTOR_SIZE: Vec2 = Vec2::splat(TILE_SIZE - 2.0 * ACTOR_INSET);
    pub const WALL_SIZE: Vec2 = Vec2::splat(TILE_SIZE);
    pub const PICKUP_SIZE: Vec2 = Vec2::splat(TILE_SIZE / 2.0);
    /// `TILE_SIZE / 1.5`, truncated to whole pixels.
    pub const POWER_UP_SIZE: Vec2 = Vec2::splat(26.0);
}

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapTile {
    /// An empty tile, including any character without a meaning.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pickup.
    Pickup,
    /// A power-up.
    PowerUp,
    /// The player's starting cell.
    PlayerStart,
    /// A cell where an enemy spawns.
    EnemyStart,
}

/// The raw layout of the built-in board.
pub const RAW_BOARD: [&str; 7] = [
    "11111111111",
    "1P220022221",
    "11101110111",
    "1G002020G01",
    "11101110111",
    "12224222221",
    "11111111111",
];
