//! Axis-aligned boxes and the axis-separated resolver used for every wall test.

use glam::{BVec2, Vec2};

/// An axis-aligned bounding box, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Builds a box of `size` centered on `center`, truncated to whole pixels.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new((center - size / 2.0).floor(), size)
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.min + offset, self.size)
    }

    /// Strict overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }

    /// Returns the first obstacle this box overlaps, if any.
    pub fn first_overlap<'a>(&self, obstacles: &'a [Aabb]) -> Option<&'a Aabb> {
        obstacles.iter().find(|obstacle| self.overlaps(obstacle))
    }

    pub fn overlaps_any(&self, obstacles: &[Aabb]) -> bool {
        self.first_overlap(obstacles).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Applies `delta` along one axis, then snaps back against the first overlapping obstacle.
///
/// The box is placed flush with the obstacle's near edge. Returns `true` if a snap happened.
pub fn resolve_axis(aabb: &mut Aabb, axis: Axis, delta: f32, obstacles: &[Aabb]) -> bool {
    match axis {
        Axis::X => aabb.min.x += delta,
        Axis::Y => aabb.min.y += delta,
    }

    let Some(obstacle) = aabb.first_overlap(obstacles).copied() else {
        return false;
    };

    match axis {
        Axis::X if delta > 0.0 => aabb.min.x = obstacle.min.x - aabb.size.x,
        Axis::X if delta < 0.0 => aabb.min.x = obstacle.max().x,
        Axis::Y if delta > 0.0 => aabb.min.y = obstacle.min.y - aabb.size.y,
        Axis::Y if delta < 0.0 => aabb.min.y = obstacle.max().y,
        // Already overlapping without moving on this axis; nothing sensible to snap to
        _ => {}
    }

    true
}

/// Moves `aabb` by `displacement`, X first and then Y, resolving each axis against `obstacles`.
///
/// Returns which axes were blocked.
pub fn sweep(aabb: &mut Aabb, displacement: Vec2, obstacles: &[Aabb]) -> BVec2 {
    let x = resolve_axis(aabb, Axis::X, displacement.x, obstacles);
    let y = resolve_axis(aabb, Axis::Y, displacement.y, obstacles);
    BVec2::new(x, y)
}
