use glam::{IVec2, Vec2};

/// One of the four unit headings an actor can move along.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_ivec2(&self) -> IVec2 {
        (*self).into()
    }

    pub fn as_vec2(&self) -> Vec2 {
        self.as_ivec2().as_vec2()
    }

    /// The two directions at right angles to this one.
    pub fn perpendicular(&self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Right, Direction::Left],
            Direction::Left | Direction::Right => [Direction::Down, Direction::Up],
        }
    }

    /// The direction along the dominant axis of `delta`.
    ///
    /// Ties go to the vertical axis, and a zero component counts as negative.
    pub fn dominant(delta: Vec2) -> Direction {
        if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if delta.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_direction_as_ivec2() {
        assert_eq!(Direction::Up.as_ivec2(), -IVec2::Y);
        assert_eq!(Direction::Down.as_ivec2(), IVec2::Y);
        assert_eq!(Direction::Left.as_ivec2(), -IVec2::X);
        assert_eq!(Direction::Right.as_ivec2(), IVec2::X);
    }

    #[test]
    fn test_perpendicular_excludes_axis() {
        for dir in Direction::DIRECTIONS {
            let [a, b] = dir.perpendicular();
            assert_eq!(dir.as_ivec2().dot(a.as_ivec2()), 0);
            assert_eq!(dir.as_ivec2().dot(b.as_ivec2()), 0);
            assert_eq!(a.opposite(), b);
        }
    }

    #[test]
    fn test_dominant() {
        assert_eq!(Direction::dominant(Vec2::new(10.0, 3.0)), Direction::Right);
        assert_eq!(Direction::dominant(Vec2::new(-10.0, 3.0)), Direction::Left);
        assert_eq!(Direction::dominant(Vec2::new(1.0, 5.0)), Direction::Down);
        assert_eq!(Direction::dominant(Vec2::new(1.0, -5.0)), Direction::Up);
        // Ties favour the vertical axis
        assert_eq!(Direction::dominant(Vec2::new(4.0, 4.0)), Direction::Down);
        assert_eq!(Direction::dominant(Vec2::ZERO), Direction::Up);
    }
}
