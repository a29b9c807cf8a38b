use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;
use rand::{rngs::SmallRng, SeedableRng};

use crate::constants::{score, STARTING_LIVES};
use crate::systems::collision::Aabb;

/// A tag component for the entity that is controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// A tag component for static wall tiles.
#[derive(Default, Component)]
pub struct Wall;

/// Marker for anything the player can collect by overlapping it.
#[derive(Default, Component)]
pub struct ItemCollider;

/// Marker for every entity spawned from the board, so a restart can clear them in one pass.
#[derive(Default, Component)]
pub struct LevelEntity;

/// A tag component denoting the type of entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum EntityType {
    Player,
    Enemy,
    Wall,
    Pickup,
    PowerUp,
}

impl EntityType {
    /// Returns the score value for collectible entity types.
    pub fn score_value(&self) -> Option<u32> {
        match self {
            EntityType::Pickup => Some(score::PICKUP),
            EntityType::PowerUp => Some(score::POWER_UP),
            _ => None,
        }
    }

    /// Returns true if the entity type is collectible by the player.
    pub fn is_collectible(&self) -> bool {
        matches!(self, EntityType::Pickup | EntityType::PowerUp)
    }
}

/// World position of an entity's top-left corner, in pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// The size of an entity's bounding box.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub size: Vec2,
}

impl Collider {
    pub fn aabb(&self, position: &Position) -> Aabb {
        Aabb::new(position.0, self.size)
    }
}

/// Player velocity, in pixels per tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub velocity: Velocity,
    pub collider: Collider,
    pub entity_type: EntityType,
    pub level: LevelEntity,
}

#[derive(Bundle)]
pub struct WallBundle {
    pub wall: Wall,
    pub position: Position,
    pub collider: Collider,
    pub entity_type: EntityType,
    pub level: LevelEntity,
}

#[derive(Bundle)]
pub struct ItemBundle {
    pub position: Position,
    pub collider: Collider,
    pub entity_type: EntityType,
    pub item_collider: ItemCollider,
    pub level: LevelEntity,
}

#[derive(Resource, Debug, Default)]
pub struct GlobalState {
    pub exit: bool,
    /// Set by a Restart intent; consumed by the restart system.
    pub restart_requested: bool,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLives(pub u8);

impl Default for PlayerLives {
    fn default() -> Self {
        Self(STARTING_LIVES)
    }
}

/// The single random source every system draws from.
///
/// Seed it for reproducible runs; production builds seed from the OS.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    pub fn from_os() -> Self {
        Self(SmallRng::from_os_rng())
    }
}
