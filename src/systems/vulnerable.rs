use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Commands, Query, ResMut};
use tracing::debug;

use crate::constants::POWER_UP_DURATION_TICKS;
use crate::systems::enemy::Enemy;

/// Present on an enemy while it can be eaten. Removed as soon as the count reaches zero,
/// so an enemy is vulnerable exactly when it carries this component.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vulnerable {
    pub remaining_ticks: u32,
}

impl Vulnerable {
    pub fn new(remaining_ticks: u32) -> Self {
        Self { remaining_ticks }
    }

    /// Counts down one tick. Returns `true` once the count has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}

/// The global power-up countdown.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PowerUpTimer {
    remaining_ticks: u32,
}

impl PowerUpTimer {
    pub fn is_active(&self) -> bool {
        self.remaining_ticks > 0
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    /// (Re)starts the countdown at full duration. Collections never stack.
    pub fn arm(&mut self) {
        self.remaining_ticks = POWER_UP_DURATION_TICKS;
    }

    /// Advance one tick. Returns `true` on the tick the countdown expires.
    pub fn tick(&mut self) -> bool {
        if self.remaining_ticks == 0 {
            return false;
        }
        self.remaining_ticks -= 1;
        self.remaining_ticks == 0
    }
}

/// Arms the global countdown and makes every given enemy vulnerable for the full duration.
pub fn arm_power_up(commands: &mut Commands, timer: &mut PowerUpTimer, enemies: impl Iterator<Item = Entity>) {
    timer.arm();
    let mut count = 0usize;
    for entity in enemies {
        commands.entity(entity).insert(Vulnerable::new(timer.remaining_ticks()));
        count += 1;
    }
    debug!(enemies = count, ticks = timer.remaining_ticks(), "Power-up armed");
}

/// Counts the global power-up down; on expiry every enemy still vulnerable goes back to pursuit.
pub fn power_up_timer_system(
    mut commands: Commands,
    mut timer: ResMut<PowerUpTimer>,
    vulnerable: Query<Entity, (With<Enemy>, With<Vulnerable>)>,
) {
    if !timer.is_active() {
        return;
    }

    if timer.tick() {
        debug!(enemies = vulnerable.iter().count(), "Power-up expired");
        for entity in vulnerable.iter() {
            commands.entity(entity).remove::<Vulnerable>();
        }
    }
}
