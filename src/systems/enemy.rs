use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Commands, Query, ResMut};
use glam::{IVec2, Vec2};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::constants::{DECISION_COOLDOWN_TICKS, ENEMY_SPEED, TILE_SIZE};
use crate::map::direction::Direction;
use crate::systems::collision::{sweep, Aabb};
use crate::systems::components::{Collider, GameRng, PlayerControlled, Position, Wall};
use crate::systems::vulnerable::Vulnerable;

/// Per-enemy AI state.
///
/// The enemy never holds a handle to the player; the AI system looks the player up each tick.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub direction: Direction,
    pub speed: f32,
    /// The cell in which the last pursuit decision was made.
    pub last_cell: IVec2,
    /// Ticks left before another pursuit decision is allowed.
    pub decision_cooldown: u32,
    /// Where the enemy returns to after being eaten.
    pub spawn: Vec2,
}

impl Enemy {
    pub fn new(spawn: Vec2, direction: Direction) -> Self {
        Self {
            direction,
            speed: ENEMY_SPEED,
            last_cell: grid_cell(spawn),
            decision_cooldown: 0,
            spawn,
        }
    }

    pub fn evade_speed(&self) -> f32 {
        self.speed / 2.0
    }
}

/// The cell an actor is considered to occupy for decision purposes.
pub fn grid_cell(position: Vec2) -> IVec2 {
    (position / TILE_SIZE).round().as_ivec2()
}

pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::DIRECTIONS[rng.random_range(0..Direction::DIRECTIONS.len())]
}

/// Picks a new heading after bumping into a wall: anything but straight back, unless nothing else exists.
pub fn recovery_direction<R: Rng + ?Sized>(current: Direction, rng: &mut R) -> Direction {
    let reverse = current.opposite();
    let options: SmallVec<[Direction; 4]> = Direction::DIRECTIONS.into_iter().filter(|d| *d != reverse).collect();
    options.choose(rng).copied().unwrap_or(reverse)
}

/// Candidate headings toward `delta`, most preferred first: the dominant axis toward the
/// target, then both perpendiculars, then the current heading if it is not already listed.
pub fn pursuit_candidates(current: Direction, delta: Vec2) -> SmallVec<[Direction; 4]> {
    let primary = Direction::dominant(delta);
    let mut candidates: SmallVec<[Direction; 4]> = SmallVec::new();
    candidates.push(primary);
    candidates.extend(primary.perpendicular());
    if !candidates.contains(&current) {
        candidates.push(current);
    }
    candidates
}

/// Chooses the heading for a pursuit decision.
///
/// The candidate list is shuffled so ties don't resolve the same way every time, and the first
/// candidate whose one-tick move stays clear of every wall wins. If every candidate is blocked,
/// any other clear heading is taken before falling back to the current one.
pub fn choose_pursuit_direction<R: Rng + ?Sized>(
    aabb: &Aabb,
    current: Direction,
    speed: f32,
    delta: Vec2,
    walls: &[Aabb],
    rng: &mut R,
) -> Direction {
    let is_clear = |direction: &Direction| !aabb.translated(direction.as_vec2() * speed).overlaps_any(walls);

    let mut candidates = pursuit_candidates(current, delta);
    candidates.shuffle(rng);

    if let Some(direction) = candidates.iter().find(|d| is_clear(d)) {
        return *direction;
    }

    Direction::DIRECTIONS
        .into_iter()
        .filter(|d| !candidates.contains(d))
        .find(|d| is_clear(d))
        .unwrap_or(current)
}

/// Unit step away from `delta` on each axis independently; zero where the delta is zero.
pub fn evasion_step(delta: Vec2) -> Vec2 {
    let away = |d: f32| {
        if d > 0.0 {
            -1.0
        } else if d < 0.0 {
            1.0
        } else {
            0.0
        }
    };
    Vec2::new(away(delta.x), away(delta.y))
}

/// One pursuit tick: maybe decide on a new heading, then move along it, resolving against walls.
pub fn pursue<R: Rng + ?Sized>(enemy: &mut Enemy, aabb: &mut Aabb, target: Vec2, walls: &[Aabb], rng: &mut R) {
    enemy.decision_cooldown = enemy.decision_cooldown.saturating_sub(1);

    let cell = grid_cell(aabb.min);
    if cell != enemy.last_cell && enemy.decision_cooldown == 0 {
        let delta = target - aabb.center();
        let chosen = choose_pursuit_direction(aabb, enemy.direction, enemy.speed, delta, walls, rng);
        trace!(cell = %cell, from = %enemy.direction, to = %chosen, "Enemy pursuit decision");

        enemy.direction = chosen;
        enemy.last_cell = cell;
        enemy.decision_cooldown = DECISION_COOLDOWN_TICKS;
    }

    let blocked = sweep(aabb, enemy.direction.as_vec2() * enemy.speed, walls);
    if blocked.any() {
        enemy.direction = recovery_direction(enemy.direction, rng);
    }
}

/// One evasion tick: step directly away from the target at half speed, or stay put and turn if
/// that step would hit a wall.
pub fn evade<R: Rng + ?Sized>(enemy: &mut Enemy, aabb: &mut Aabb, target: Vec2, walls: &[Aabb], rng: &mut R) {
    let step = evasion_step(target - aabb.center()) * enemy.evade_speed();
    let moved = aabb.translated(step);

    if moved.overlaps_any(walls) {
        enemy.direction = recovery_direction(enemy.direction, rng);
    } else {
        *aabb = moved;
    }
}

/// Drives every enemy for one tick.
///
/// Vulnerable enemies count their own window down and evade; once it runs out they go straight
/// back to pursuit on the same tick.
pub fn enemy_ai_system(
    mut commands: Commands,
    mut rng: ResMut<GameRng>,
    player: Query<(&Position, &Collider), (With<PlayerControlled>, Without<Enemy>)>,
    walls: Query<(&Position, &Collider), (With<Wall>, Without<Enemy>)>,
    mut enemies: Query<(Entity, &mut Enemy, &mut Position, &Collider, Option<&mut Vulnerable>)>,
) {
    let target = match player.single() {
        Ok((position, collider)) => collider.aabb(position).center(),
        Err(e) => {
            warn!(error = %e, "Enemy AI has no single player to target");
            return;
        }
    };

    let walls: Vec<Aabb> = walls.iter().map(|(position, collider)| collider.aabb(position)).collect();

    for (entity, mut enemy, mut position, collider, vulnerable) in enemies.iter_mut() {
        let mut aabb = collider.aabb(&position);

        let evading = match vulnerable {
            Some(mut vulnerable) => {
                if vulnerable.tick() {
                    trace!(?entity, "Enemy vulnerability ran out");
                    commands.entity(entity).remove::<Vulnerable>();
                    false
                } else {
                    true
                }
            }
            None => false,
        };

        if evading {
            evade(&mut enemy, &mut aabb, target, &walls, &mut rng.0);
        } else {
            pursue(&mut enemy, &mut aabb, target, &walls, &mut rng.0);
        }

        if position.0 != aabb.min {
            position.0 = aabb.min;
        }
    }
}
