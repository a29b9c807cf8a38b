//! Board decoding: turns a rectangular character grid into tile placements.

use bevy_ecs::resource::Resource;
use glam::{IVec2, Vec2};
use tracing::warn;

use crate::constants::{MapTile, BOARD_MARGIN, BOARD_PIXEL_OFFSET, DEFAULT_PLAYER_START, TILE_SIZE};
use crate::error::ParseError;

/// Represents the decoded data from a raw board layout.
///
/// Stored as a resource so a restart can re-spawn the level without touching the raw text again.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ParsedLevel {
    /// Tiles in row-major order, indexed `[row][column]`.
    tiles: Vec<Vec<MapTile>>,
    /// The player's starting cell, as `(column, row)`.
    pub player_start: IVec2,
    /// Whether `player_start` came from the board or from the fallback.
    pub player_start_found: bool,
}

impl ParsedLevel {
    /// The board size, in cells.
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.tiles[0].len() as i32, self.tiles.len() as i32)
    }

    pub fn tile(&self, cell: IVec2) -> Option<MapTile> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        self.tiles.get(cell.y as usize)?.get(cell.x as usize).copied()
    }

    /// Iterates over every cell holding the given tile, in row-major order.
    pub fn cells_of(&self, kind: MapTile) -> impl Iterator<Item = IVec2> + '_ {
        self.tiles.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, tile)| **tile == kind)
                .map(move |(x, _)| IVec2::new(x as i32, y as i32))
        })
    }

    /// Window size in pixels: the board plus the UI margin.
    pub fn window_size(&self) -> Vec2 {
        self.size().as_vec2() * TILE_SIZE + Vec2::splat(BOARD_MARGIN)
    }
}

/// Converts a cell coordinate into the world position of its top-left corner.
pub fn cell_to_world(cell: IVec2) -> Vec2 {
    cell.as_vec2() * TILE_SIZE + BOARD_PIXEL_OFFSET
}

/// Parser for converting raw board layouts into structured level data.
pub struct LevelParser;

impl LevelParser {
    /// Parses a single character into a map tile.
    ///
    /// Characters outside the board alphabet are treated as empty space.
    pub fn parse_character(c: char) -> MapTile {
        match c {
            '1' => MapTile::Wall,
            '2' => MapTile::Pickup,
            '4' => MapTile::PowerUp,
            'G' => MapTile::EnemyStart,
            'P' => MapTile::PlayerStart,
            _ => MapTile::Empty,
        }
    }

    /// Parses a raw board layout into structured level data.
    ///
    /// The player starts at the first `P` found in row-major order. A board without one
    /// is still valid; the player is placed at [`DEFAULT_PLAYER_START`] and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no rows, or if the rows do not all share the width
    /// of the first one.
    pub fn parse_board<S: AsRef<str>>(raw_board: &[S]) -> Result<ParsedLevel, ParseError> {
        let first = raw_board.first().ok_or(ParseError::EmptyBoard)?;
        let expected = first.as_ref().chars().count();
        if expected == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(raw_board.len());
        let mut player_start: Option<IVec2> = None;

        for (y, line) in raw_board.iter().enumerate() {
            let row: Vec<MapTile> = line.as_ref().chars().map(Self::parse_character).collect();
            if row.len() != expected {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }

            if player_start.is_none() {
                if let Some(x) = row.iter().position(|tile| *tile == MapTile::PlayerStart) {
                    player_start = Some(IVec2::new(x as i32, y as i32));
                }
            }

            tiles.push(row);
        }

        let player_start_found = player_start.is_some();
        let player_start = player_start.unwrap_or_else(|| {
            warn!(cell = %DEFAULT_PLAYER_START, "Player start 'P' not found in board, using default cell");
            DEFAULT_PLAYER_START
        });

        Ok(ParsedLevel {
            tiles,
            player_start,
            player_start_found,
        })
    }
}
