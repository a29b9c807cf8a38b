//! This module defines the board layout and the helpers for decoding it.

pub mod direction;
pub mod parser;
