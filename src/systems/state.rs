use bevy_ecs::{
    entity::Entity,
    query::{Has, With, Without},
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
    world::World,
};
use glam::Vec2;
use tracing::{debug, info, warn};

use crate::{
    constants::score,
    map::parser::ParsedLevel,
    systems::{
        components::{
            Collider, EntityType, GameRng, GlobalState, ItemCollider, PlayerControlled, PlayerLives, Position, ScoreResource,
            Velocity,
        },
        enemy::{random_direction, Enemy},
        level::{actor_position, reset_session},
        vulnerable::Vulnerable,
    },
};

/// A resource to track the overall phase of the session.
#[derive(Resource, Debug, Default, PartialEq, Eq, Clone, Copy, strum_macros::Display)]
pub enum GamePhase {
    /// The simulation is running.
    #[default]
    Playing,
    /// The player ran out of lives. Waits for a restart.
    Lost,
    /// Every item was collected. Waits for a restart.
    Won,
}

impl GamePhase {
    /// Whether the session has ended and a restart will be accepted.
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Lost | GamePhase::Won)
    }
}

/// Run condition for the gameplay systems.
pub fn is_playing(phase: Res<GamePhase>) -> bool {
    *phase == GamePhase::Playing
}

/// Performs a requested restart: clears the board, re-spawns it and resets the session.
pub fn restart_system(world: &mut World) {
    let requested = std::mem::take(&mut world.resource_mut::<GlobalState>().restart_requested);
    if !requested {
        return;
    }

    let previous = *world.resource::<GamePhase>();
    info!(%previous, "Restarting session");
    reset_session(world);
}

/// Resolves every player/enemy overlap for this tick.
///
/// A vulnerable enemy is eaten and sent back to its spawn. Any other enemy costs a life and sends
/// the player back to the start; the remaining overlaps are skipped for this tick once that happens.
#[allow(clippy::too_many_arguments)]
pub fn enemy_contact_system(
    mut commands: Commands,
    mut score: ResMut<ScoreResource>,
    mut lives: ResMut<PlayerLives>,
    mut phase: ResMut<GamePhase>,
    mut rng: ResMut<GameRng>,
    level: Res<ParsedLevel>,
    mut player: Query<(&mut Position, &mut Velocity, &Collider), (With<PlayerControlled>, Without<Enemy>)>,
    mut enemies: Query<(Entity, &mut Enemy, &mut Position, &Collider, Has<Vulnerable>), Without<PlayerControlled>>,
) {
    let (mut player_position, mut velocity, player_collider) = match player.single_mut() {
        Ok(player) => player,
        Err(e) => {
            warn!(error = %e, "No single player to check enemy contact against");
            return;
        }
    };

    for (entity, mut enemy, mut position, collider, vulnerable) in enemies.iter_mut() {
        if !player_collider.aabb(&player_position).overlaps(&collider.aabb(&position)) {
            continue;
        }

        if vulnerable {
            score.0 += score::ENEMY_EATEN;
            position.0 = enemy.spawn;
            enemy.direction = random_direction(&mut rng.0);
            commands.entity(entity).remove::<Vulnerable>();
            debug!(?entity, new_score = score.0, "Enemy eaten");
            continue;
        }

        lives.0 = lives.0.saturating_sub(1);
        player_position.0 = actor_position(level.player_start);
        velocity.0 = Vec2::ZERO;
        info!(?entity, lives = lives.0, "Player caught");

        if lives.0 == 0 {
            *phase = GamePhase::Lost;
            info!(score = score.0, "Game over");
        }
        break;
    }
}

/// Ends the session as won once no pickups or power-ups remain.
pub fn win_condition_system(
    mut phase: ResMut<GamePhase>,
    score: Res<ScoreResource>,
    items: Query<&EntityType, With<ItemCollider>>,
) {
    if *phase != GamePhase::Playing {
        return;
    }

    if items.iter().all(|entity_type| !entity_type.is_collectible()) {
        *phase = GamePhase::Won;
        info!(score = score.0, "Board cleared");
    }
}
