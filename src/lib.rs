//! Heartchase: a tile-grid maze chase simulation.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod map;
pub mod snapshot;
pub mod systems;
