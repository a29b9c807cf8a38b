use bevy_ecs::{
    event::EventReader,
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use tracing::{debug, info, warn};

use crate::{
    constants::PLAYER_SPEED,
    events::{GameEvent, Intent},
    map::parser::ParsedLevel,
    systems::{
        collision::{sweep, Aabb},
        components::{Collider, GlobalState, PlayerControlled, Position, Velocity, Wall},
        state::GamePhase,
    },
};

/// Applies a movement intent to the player's velocity.
///
/// A press replaces the whole velocity, so the player never moves diagonally; a release
/// clears just its own axis.
pub fn apply_intent(velocity: &mut Velocity, intent: Intent) {
    match intent {
        Intent::Move(direction) => velocity.0 = direction.as_vec2() * PLAYER_SPEED,
        Intent::StopHorizontal => velocity.0.x = 0.0,
        Intent::StopVertical => velocity.0.y = 0.0,
        Intent::Restart | Intent::Quit => {}
    }
}

/// Processes the intents delivered this tick.
///
/// Movement only counts while playing, restarts only once the session is over, and quitting
/// is always honoured.
pub fn player_control_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    phase: Res<GamePhase>,
    mut players: Query<&mut Velocity, With<PlayerControlled>>,
) {
    let phase = *phase;
    for event in events.read() {
        let GameEvent::Intent(intent) = *event;
        match intent {
            Intent::Quit => {
                info!("Exit requested");
                state.exit = true;
            }
            Intent::Restart => {
                if phase.is_over() {
                    state.restart_requested = true;
                } else {
                    debug!(%phase, "Ignoring restart while the session is still running");
                }
            }
            _ if phase == GamePhase::Playing => match players.single_mut() {
                Ok(mut velocity) => apply_intent(&mut velocity, intent),
                Err(e) => warn!(error = %e, "No single player to steer"),
            },
            _ => {}
        }
    }
}

/// Re-enters a box that has fully left `bounds` from the opposite edge.
pub fn wrap_around(aabb: &mut Aabb, bounds: Vec2) {
    if aabb.max().x < 0.0 {
        aabb.min.x = bounds.x;
    } else if aabb.min.x > bounds.x {
        aabb.min.x = -aabb.size.x;
    }

    if aabb.max().y < 0.0 {
        aabb.min.y = bounds.y;
    } else if aabb.min.y > bounds.y {
        aabb.min.y = -aabb.size.y;
    }
}

/// Moves the player by its velocity, one axis at a time, stopping it against walls.
///
/// A blocked axis has its velocity cleared. Wraparound uses the full window, margin included.
pub fn player_movement_system(
    level: Res<ParsedLevel>,
    walls: Query<(&Position, &Collider), (With<Wall>, Without<PlayerControlled>)>,
    mut players: Query<(&mut Position, &mut Velocity, &Collider), With<PlayerControlled>>,
) {
    let walls: Vec<Aabb> = walls.iter().map(|(position, collider)| collider.aabb(position)).collect();
    let bounds = level.window_size();

    for (mut position, mut velocity, collider) in players.iter_mut() {
        if velocity.0 == Vec2::ZERO {
            continue;
        }

        let mut aabb = collider.aabb(&position);
        let blocked = sweep(&mut aabb, velocity.0, &walls);
        if blocked.x {
            velocity.0.x = 0.0;
        }
        if blocked.y {
            velocity.0.y = 0.0;
        }

        wrap_around(&mut aabb, bounds);
        position.0 = aabb.min;
    }
}
