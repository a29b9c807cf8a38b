use bevy_ecs::{entity::Entity, query::With, world::World};
use glam::{IVec2, Vec2};
use tracing::{debug, info};

use crate::{
    constants::{collider, MapTile, TILE_SIZE},
    map::parser::{cell_to_world, ParsedLevel},
    systems::{
        collision::Aabb,
        components::{
            Collider, EntityType, GameRng, ItemBundle, LevelEntity, PlayerBundle, PlayerLives, Position, ScoreResource, Velocity,
            Wall, WallBundle,
        },
        enemy::{random_direction, Enemy},
        state::GamePhase,
        vulnerable::PowerUpTimer,
    },
};

/// Top-left corner of an actor box placed in `cell`.
pub fn actor_position(cell: IVec2) -> Vec2 {
    cell_to_world(cell) + Vec2::splat(collider::ACTOR_INSET)
}

/// Top-left corner of an item box of `size` centered in `cell`.
pub fn item_position(cell: IVec2, size: Vec2) -> Vec2 {
    Aabb::centered(cell_to_world(cell) + Vec2::splat(TILE_SIZE / 2.0), size).min
}

/// Spawns every entity described by the level resource.
///
/// Each enemy draws its starting heading from the game's random source.
pub fn spawn_level(world: &mut World) {
    let level = world.resource::<ParsedLevel>().clone();

    world.spawn(PlayerBundle {
        player: Default::default(),
        position: Position(actor_position(level.player_start)),
        velocity: Velocity::default(),
        collider: Collider {
            size: collider::ACTOR_SIZE,
        },
        entity_type: EntityType::Player,
        level: LevelEntity,
    });

    let walls: Vec<WallBundle> = level
        .cells_of(MapTile::Wall)
        .map(|cell| WallBundle {
            wall: Wall,
            position: Position(cell_to_world(cell)),
            collider: Collider {
                size: collider::WALL_SIZE,
            },
            entity_type: EntityType::Wall,
            level: LevelEntity,
        })
        .collect();

    let items: Vec<ItemBundle> = [
        (MapTile::Pickup, EntityType::Pickup, collider::PICKUP_SIZE),
        (MapTile::PowerUp, EntityType::PowerUp, collider::POWER_UP_SIZE),
    ]
    .into_iter()
    .flat_map(|(tile, entity_type, size)| {
        level
            .cells_of(tile)
            .map(|cell| ItemBundle {
                position: Position(item_position(cell, size)),
                collider: Collider { size },
                entity_type,
                item_collider: Default::default(),
                level: LevelEntity,
            })
            .collect::<Vec<_>>()
    })
    .collect();

    let (wall_count, item_count) = (walls.len(), items.len());
    world.spawn_batch(walls);
    world.spawn_batch(items);

    let mut enemy_count = 0usize;
    for cell in level.cells_of(MapTile::EnemyStart) {
        let spawn = actor_position(cell);
        let direction = random_direction(&mut world.resource_mut::<GameRng>().0);
        world.spawn((
            Enemy::new(spawn, direction),
            Position(spawn),
            Collider {
                size: collider::ACTOR_SIZE,
            },
            EntityType::Enemy,
            LevelEntity,
        ));
        enemy_count += 1;
    }

    debug!(
        walls = wall_count,
        items = item_count,
        enemies = enemy_count,
        player_start = %level.player_start,
        "Level spawned"
    );
}

/// Removes every entity that was spawned from the board.
pub fn despawn_level(world: &mut World) {
    let entities: Vec<Entity> = world.query_filtered::<Entity, With<LevelEntity>>().iter(world).collect();
    for entity in &entities {
        world.despawn(*entity);
    }
    debug!(count = entities.len(), "Level cleared");
}

/// Starts a fresh session on the current level: the board is rebuilt from the level resource and
/// score, lives, power-up and phase go back to their initial values.
pub fn reset_session(world: &mut World) {
    despawn_level(world);
    spawn_level(world);

    world.insert_resource(ScoreResource::default());
    world.insert_resource(PlayerLives::default());
    world.insert_resource(PowerUpTimer::default());
    world.insert_resource(GamePhase::Playing);

    info!("Session started");
}
