use glam::I8Vec2;
use strum_macros::AsRefStr;

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    #[default]
    Left,
    Right,
}

impl Direction {
    /// The four cardinal directions, for iteration.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The canonical tie-break order used at ghost decision points.
    ///
    /// This order is observable behavior: when two candidate tiles are
    /// equidistant from the target, the earlier entry wins. It is deliberately
    /// its own table rather than the declaration order above.
    pub const PRIORITY: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as a unit I8Vec2 (y grows downward).
    pub const fn as_vec(self) -> I8Vec2 {
        match self {
            Direction::Up => I8Vec2::new(0, -1),
            Direction::Down => I8Vec2::new(0, 1),
            Direction::Left => I8Vec2::new(-1, 0),
            Direction::Right => I8Vec2::new(1, 0),
        }
    }
}

impl From<Direction> for I8Vec2 {
    fn from(dir: Direction) -> Self {
        dir.as_vec()
    }
}
