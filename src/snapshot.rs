//! A read-only view of the world, handed to whatever draws or inspects the game.

use bevy_ecs::{query::Has, world::World};
use glam::Vec2;

use crate::systems::{
    collision::Aabb,
    components::{Collider, EntityType, PlayerLives, Position, ScoreResource},
    state::GamePhase,
    vulnerable::{PowerUpTimer, Vulnerable},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySnapshot {
    pub kind: EntityType,
    pub bounds: Aabb,
    pub vulnerable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    /// Ticks left on the power-up countdown, zero when inactive.
    pub power_up_ticks: u32,
    pub entities: Vec<EntitySnapshot>,
}

impl Snapshot {
    /// Captures the current state of `world`.
    pub fn capture(world: &mut World) -> Self {
        let mut entities: Vec<EntitySnapshot> = world
            .query::<(&EntityType, &Position, &Collider, Has<Vulnerable>)>()
            .iter(world)
            .map(|(kind, position, collider, vulnerable)| EntitySnapshot {
                kind: *kind,
                bounds: collider.aabb(position),
                vulnerable,
            })
            .collect();
        entities.sort_by(|a, b| {
            (a.kind as u8)
                .cmp(&(b.kind as u8))
                .then(a.bounds.min.y.total_cmp(&b.bounds.min.y))
                .then(a.bounds.min.x.total_cmp(&b.bounds.min.x))
        });

        Self {
            phase: *world.resource::<GamePhase>(),
            score: world.resource::<ScoreResource>().0,
            lives: world.resource::<PlayerLives>().0,
            power_up_ticks: world.resource::<PowerUpTimer>().remaining_ticks(),
            entities,
        }
    }

    pub fn of_kind(&self, kind: EntityType) -> impl Iterator<Item = &EntitySnapshot> + '_ {
        self.entities.iter().filter(move |entity| entity.kind == kind)
    }

    pub fn count(&self, kind: EntityType) -> usize {
        self.of_kind(kind).count()
    }

    /// Top-left corners of every entity of `kind`, top to bottom then left to right.
    pub fn positions(&self, kind: EntityType) -> Vec<Vec2> {
        self.of_kind(kind).map(|entity| entity.bounds.min).collect()
    }

    pub fn player(&self) -> Option<&EntitySnapshot> {
        self.of_kind(EntityType::Player).next()
    }
}
