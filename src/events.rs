use bevy_ecs::prelude::*;

use crate::map::direction::Direction;

/// A discrete command from whatever is driving the game (keyboard, script, autopilot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Intent {
    /// Press: set the player's velocity to full speed in this direction.
    Move(Direction),
    /// Release: zero the horizontal velocity component.
    StopHorizontal,
    /// Release: zero the vertical velocity component.
    StopVertical,
    /// Start a fresh session. Only honoured once the session has ended.
    Restart,
    Quit,
}

impl Intent {
    pub const MOVE_LEFT: Intent = Intent::Move(Direction::Left);
    pub const MOVE_RIGHT: Intent = Intent::Move(Direction::Right);
    pub const MOVE_UP: Intent = Intent::Move(Direction::Up);
    pub const MOVE_DOWN: Intent = Intent::Move(Direction::Down);
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Intent(Intent),
}

impl From<Intent> for GameEvent {
    fn from(intent: Intent) -> Self {
        GameEvent::Intent(intent)
    }
}
