#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, world::World};
use glam::{IVec2, Vec2};
use heartchase::{
    constants::collider,
    events::{GameEvent, Intent},
    game::Game,
    map::{direction::Direction, parser::LevelParser},
    systems::{
        actor_position, item_position, Collider, Enemy, EntityType, GamePhase, GameRng, GlobalState, ItemBundle, ItemCollider,
        LevelEntity, PlayerBundle, PlayerControlled, PlayerLives, Position, PowerUpTimer, ScoreResource, Velocity, Wall,
        WallBundle,
    },
};

pub const TEST_SEED: u64 = 0x5EED;

/// A closed 5x5 room with the player in the middle and nothing else.
pub const EMPTY_ROOM: [&str; 5] = ["11111", "10001", "10P01", "10001", "11111"];

/// Builds a deterministic game from a small board.
pub fn game_from(board: &[&str]) -> Game {
    Game::from_board(board, TEST_SEED).expect("test board should decode")
}

/// Creates a world with every resource the gameplay systems read, but no entities.
pub fn create_test_world(board: &[&str]) -> World {
    let mut world = World::new();
    world.init_resource::<Events<GameEvent>>();
    world.insert_resource(LevelParser::parse_board(board).expect("test board should decode"));
    world.insert_resource(GameRng::seeded(TEST_SEED));
    world.insert_resource(GlobalState::default());
    world.insert_resource(ScoreResource::default());
    world.insert_resource(PlayerLives::default());
    world.insert_resource(PowerUpTimer::default());
    world.insert_resource(GamePhase::default());
    world
}

pub fn spawn_test_player_at(world: &mut World, position: Vec2) -> Entity {
    world
        .spawn(PlayerBundle {
            player: PlayerControlled,
            position: Position(position),
            velocity: Velocity::default(),
            collider: Collider {
                size: collider::ACTOR_SIZE,
            },
            entity_type: EntityType::Player,
            level: LevelEntity,
        })
        .id()
}

pub fn spawn_test_player(world: &mut World, cell: IVec2) -> Entity {
    spawn_test_player_at(world, actor_position(cell))
}

pub fn spawn_test_wall(world: &mut World, cell: IVec2) -> Entity {
    world
        .spawn(WallBundle {
            wall: Wall,
            position: Position(heartchase::map::parser::cell_to_world(cell)),
            collider: Collider {
                size: collider::WALL_SIZE,
            },
            entity_type: EntityType::Wall,
            level: LevelEntity,
        })
        .id()
}

pub fn spawn_test_item(world: &mut World, cell: IVec2, entity_type: EntityType) -> Entity {
    let size = match entity_type {
        EntityType::PowerUp => collider::POWER_UP_SIZE,
        _ => collider::PICKUP_SIZE,
    };
    world
        .spawn(ItemBundle {
            position: Position(item_position(cell, size)),
            collider: Collider { size },
            entity_type,
            item_collider: ItemCollider,
            level: LevelEntity,
        })
        .id()
}

pub fn spawn_test_enemy_at(world: &mut World, position: Vec2, direction: Direction) -> Entity {
    world
        .spawn((
            Enemy::new(position, direction),
            Position(position),
            Collider {
                size: collider::ACTOR_SIZE,
            },
            EntityType::Enemy,
            LevelEntity,
        ))
        .id()
}

pub fn spawn_test_enemy(world: &mut World, cell: IVec2, direction: Direction) -> Entity {
    spawn_test_enemy_at(world, actor_position(cell), direction)
}

pub fn send_intent(world: &mut World, intent: Intent) {
    world.resource_mut::<Events<GameEvent>>().send(GameEvent::from(intent));
}

pub fn count_of(world: &mut World, entity_type: EntityType) -> usize {
    world
        .query::<&EntityType>()
        .iter(world)
        .filter(|&&kind| kind == entity_type)
        .count()
}

pub fn position_of(world: &World, entity: Entity) -> Vec2 {
    world.get::<Position>(entity).expect("entity should have a position").0
}

/// Ticks `game` with no intents until `done` holds, failing the test after `limit` ticks.
pub fn tick_until(game: &mut Game, limit: u32, mut done: impl FnMut(&Game) -> bool) -> u32 {
    for tick in 1..=limit {
        game.tick(&[]);
        if done(game) {
            return tick;
        }
    }
    panic!("condition not reached within {limit} ticks");
}
