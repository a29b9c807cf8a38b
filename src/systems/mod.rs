//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod collision;
pub mod components;
pub mod enemy;
pub mod item;
pub mod level;
pub mod player;
pub mod state;
pub mod vulnerable;

pub use self::collision::*;
pub use self::components::*;
pub use self::enemy::*;
pub use self::item::*;
pub use self::level::*;
pub use self::player::*;
pub use self::state::*;
pub use self::vulnerable::*;
