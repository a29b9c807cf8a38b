use bevy_ecs::query::With;
use glam::{IVec2, Vec2};
use heartchase::constants::RAW_BOARD;
use heartchase::events::Intent;
use heartchase::game::Game;
use heartchase::input::{Autopilot, IntentSource};
use heartchase::systems::{
    actor_position, reset_session, Enemy, EntityType, GamePhase, GlobalState, PlayerControlled, PlayerLives, Position, Velocity,
    Vulnerable,
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

/// The player and one enemy share the top corridor; the last pickup is sealed off below.
const SHARED_CORRIDOR: [&str; 5] = ["1111111", "1P000G1", "1111111", "1200001", "1111111"];

/// Same as above with a second enemy in the corridor.
const TWO_ENEMIES: [&str; 5] = ["1111111", "1PG0G01", "1111111", "1200001", "1111111"];

fn player_position(game: &mut Game) -> Vec2 {
    game.world
        .query_filtered::<&Position, With<PlayerControlled>>()
        .single(&game.world)
        .expect("exactly one player")
        .0
}

fn place_enemy_on_player(game: &mut Game) {
    let target = player_position(game);
    let mut enemies = game.world.query::<(&Enemy, &mut Position)>();
    for (_, mut position) in enemies.iter_mut(&mut game.world) {
        position.0 = target;
    }
}

#[test]
fn test_board_without_items_is_won_immediately() {
    let mut game = common::game_from(&["111", "1P1", "111"]);
    assert_that(&game.phase()).is_equal_to(GamePhase::Playing);

    game.tick(&[]);
    assert_that(&game.phase()).is_equal_to(GamePhase::Won);
}

#[test]
fn test_collecting_last_pickup_wins_on_the_same_tick() {
    let mut game = common::game_from(&["11111", "1P201", "11111"]);

    game.tick(&[Intent::MOVE_RIGHT]);
    assert_that(&game.phase()).is_equal_to(GamePhase::Playing);
    common::tick_until(&mut game, 10, |game| game.score() > 0);

    assert_that(&game.score()).is_equal_to(10);
    assert_that(&game.phase()).is_equal_to(GamePhase::Won);

    // Movement no longer counts once the session is over
    let before = game.snapshot();
    game.tick(&[Intent::MOVE_LEFT]);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_caught_player_loses_a_life_and_returns_to_start() {
    let mut game = common::game_from(&SHARED_CORRIDOR);
    for _ in 0..5 {
        game.tick(&[Intent::MOVE_RIGHT]);
    }
    assert_that(&player_position(&mut game)).is_not_equal_to(actor_position(IVec2::new(1, 1)));

    place_enemy_on_player(&mut game);
    game.tick(&[]);

    assert_that(&game.lives()).is_equal_to(2);
    assert_that(&game.phase()).is_equal_to(GamePhase::Playing);
    assert_eq!(player_position(&mut game), actor_position(IVec2::new(1, 1)));
    let velocity = game
        .world
        .query_filtered::<&Velocity, With<PlayerControlled>>()
        .single(&game.world)
        .expect("exactly one player")
        .0;
    assert_eq!(velocity, Vec2::ZERO);
}

#[test]
fn test_one_life_per_tick_when_caught_by_several_enemies() {
    let mut game = common::game_from(&TWO_ENEMIES);
    assert_that(&game.snapshot().count(EntityType::Enemy)).is_equal_to(2);

    place_enemy_on_player(&mut game);
    game.tick(&[]);

    assert_that(&game.lives()).is_equal_to(2);
    assert_that(&game.phase()).is_equal_to(GamePhase::Playing);
    assert_eq!(player_position(&mut game), actor_position(IVec2::new(1, 1)));
}

#[test]
fn test_losing_the_last_life_ends_the_session() {
    let mut game = common::game_from(&SHARED_CORRIDOR);
    let fresh = game.snapshot();
    game.world.insert_resource(PlayerLives(1));

    place_enemy_on_player(&mut game);
    game.tick(&[]);

    assert_that(&game.lives()).is_equal_to(0);
    assert_that(&game.phase()).is_equal_to(GamePhase::Lost);

    // Nothing moves while lost
    let lost = game.snapshot();
    for _ in 0..10 {
        game.tick(&[Intent::MOVE_DOWN]);
    }
    assert_eq!(game.snapshot(), lost);

    game.tick(&[Intent::Restart]);
    let restarted = game.snapshot();
    assert_that(&restarted.phase).is_equal_to(GamePhase::Playing);
    assert_that(&restarted.lives).is_equal_to(3);
    assert_that(&restarted.score).is_equal_to(0);
    for kind in [EntityType::Player, EntityType::Wall, EntityType::Pickup, EntityType::PowerUp] {
        assert_eq!(restarted.positions(kind), fresh.positions(kind));
    }
    assert_that(&restarted.count(EntityType::Enemy)).is_equal_to(1);
}

#[test]
fn test_eating_a_vulnerable_enemy() {
    let mut game = common::game_from(&SHARED_CORRIDOR);
    let spawn = actor_position(IVec2::new(5, 1));

    let enemy = game
        .world
        .query_filtered::<bevy_ecs::entity::Entity, With<Enemy>>()
        .single(&game.world)
        .expect("exactly one enemy");
    game.world.entity_mut(enemy).insert(Vulnerable::new(100));
    place_enemy_on_player(&mut game);

    game.tick(&[]);

    assert_that(&game.score()).is_equal_to(200);
    assert_that(&game.lives()).is_equal_to(3);
    assert_eq!(common::position_of(&game.world, enemy), spawn);
    assert_that(&game.world.get::<Vulnerable>(enemy).is_none()).is_true();
}

#[test]
fn test_restart_ignored_while_playing() {
    let mut game = common::game_from(&SHARED_CORRIDOR);
    game.tick(&[Intent::MOVE_RIGHT]);
    game.tick(&[Intent::Restart]);

    assert_that(&game.world.resource::<GlobalState>().restart_requested).is_false();
    assert_that(&player_position(&mut game)).is_equal_to(actor_position(IVec2::new(1, 1)) + Vec2::new(8.0, 0.0));
}

#[test]
fn test_quit_ends_the_loop() {
    let mut game = common::game_from(&SHARED_CORRIDOR);
    assert_that(&game.tick(&[])).is_false();
    assert_that(&game.tick(&[Intent::Quit])).is_true();
}

#[test]
fn test_session_reset_is_idempotent() {
    let mut fresh = common::game_from(&RAW_BOARD);
    let expected = fresh.snapshot();

    let mut game = common::game_from(&RAW_BOARD);
    for tick in 0..240 {
        let intent = if (tick / 30) % 2 == 0 { Intent::MOVE_RIGHT } else { Intent::MOVE_DOWN };
        game.tick(&[intent]);
    }

    reset_session(&mut game.world);
    assert_eq!(game.snapshot(), expected);

    reset_session(&mut game.world);
    assert_eq!(game.snapshot(), expected);
}

#[test]
fn test_same_seed_same_game() {
    let mut first = common::game_from(&RAW_BOARD);
    let mut second = common::game_from(&RAW_BOARD);
    let script = [Intent::MOVE_RIGHT, Intent::MOVE_DOWN, Intent::MOVE_LEFT, Intent::MOVE_UP];

    for tick in 0..600usize {
        let intents = [script[(tick / 25) % script.len()]];
        first.tick(&intents);
        second.tick(&intents);
        if tick % 50 == 0 {
            assert_eq!(first.snapshot(), second.snapshot());
        }
    }
    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn test_actors_never_overlap_walls() {
    let mut game = common::game_from(&RAW_BOARD);
    let mut autopilot = Autopilot::new(Some(common::TEST_SEED), 50);

    for _ in 0..3000 {
        let snapshot = game.snapshot();
        let intents = autopilot.next_intents(&snapshot);
        game.tick(&intents);

        let snapshot = game.snapshot();
        let walls: Vec<_> = snapshot.of_kind(EntityType::Wall).map(|wall| wall.bounds).collect();
        for actor in snapshot
            .entities
            .iter()
            .filter(|entity| matches!(entity.kind, EntityType::Player | EntityType::Enemy))
        {
            assert_that(&actor.bounds.overlaps_any(&walls)).is_false();
        }
    }
}
