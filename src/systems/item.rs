use bevy_ecs::{
    entity::Entity,
    query::{With, Without},
    system::{Commands, Query, ResMut},
};
use tracing::{debug, trace, warn};

use crate::systems::{
    components::{Collider, EntityType, ItemCollider, PlayerControlled, Position, ScoreResource},
    enemy::Enemy,
    vulnerable::{arm_power_up, PowerUpTimer},
};

/// Determines if an overlap between two entity types is a collection.
///
/// Returns `true` if one entity is the player and the other is a collectible item.
pub fn is_valid_item_collision(entity1: EntityType, entity2: EntityType) -> bool {
    match (entity1, entity2) {
        (EntityType::Player, entity) | (entity, EntityType::Player) => entity.is_collectible(),
        _ => false,
    }
}

/// Collects every item the player overlaps: scores it, removes it, and arms the power-up
/// countdown if any power-up was among them.
///
/// Several power-ups taken on the same tick arm the countdown once.
pub fn item_collection_system(
    mut commands: Commands,
    mut score: ResMut<ScoreResource>,
    mut timer: ResMut<PowerUpTimer>,
    player: Query<(&Position, &Collider), With<PlayerControlled>>,
    items: Query<(Entity, &EntityType, &Position, &Collider), (With<ItemCollider>, Without<PlayerControlled>)>,
    enemies: Query<Entity, With<Enemy>>,
) {
    let player_box = match player.single() {
        Ok((position, collider)) => collider.aabb(position),
        Err(e) => {
            warn!(error = %e, "No single player to collect items");
            return;
        }
    };

    let mut power_up_collected = false;
    for (entity, entity_type, position, collider) in items.iter() {
        if !is_valid_item_collision(EntityType::Player, *entity_type) || !player_box.overlaps(&collider.aabb(position)) {
            continue;
        }

        if let Some(value) = entity_type.score_value() {
            score.0 += value;
            trace!(?entity, item_type = %entity_type, value, new_score = score.0, "Item collected by player");
        }

        power_up_collected |= *entity_type == EntityType::PowerUp;
        commands.entity(entity).despawn();
    }

    if power_up_collected {
        debug!(rearmed = timer.is_active(), "Power-up collected");
        arm_power_up(&mut commands, &mut timer, enemies.iter());
    }
}
