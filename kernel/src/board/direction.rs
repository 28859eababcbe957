//! Cardinal directions and integer board positions.
//!
//! The y axis grows downward (row index), so North is `(0, -1)`.

/// A board coordinate. Signed so that off-board neighbours are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position `steps` tiles away in `direction`.
    #[must_use]
    pub const fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }

    /// Manhattan distance. Path steps are axis-aligned, so this is the gap
    /// length between two consecutive path nodes.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}|{})", self.x, self.y)
    }
}

/// Facing of the bot.
///
/// The discriminant is the `botRotation` code used by level files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in code order (clockwise from North).
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Decode a level-file direction code. Returns `None` for unknown codes.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::North),
            1 => Some(Self::East),
            2 => Some(Self::South),
            3 => Some(Self::West),
            _ => None,
        }
    }

    /// The level-file direction code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Unit step `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Rotate by `quarter_turns` clockwise (negative is counter-clockwise).
    #[must_use]
    pub const fn rotate(self, quarter_turns: i32) -> Self {
        let idx = (self as i32 + quarter_turns).rem_euclid(4);
        match idx {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// Direction of travel from `from` to `to`.
    ///
    /// Uses the dominant axis of the difference; the horizontal axis wins
    /// ties. Identical positions yield `East`.
    #[must_use]
    pub fn from_to(from: Position, to: Position) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx.abs() >= dy.abs() {
            if dx >= 0 {
                Self::East
            } else {
                Self::West
            }
        } else if dy >= 0 {
            Self::South
        } else {
            Self::North
        }
    }

    /// Signed quarter turns from `self` to `target`, normalised to `-1..=2`.
    #[must_use]
    pub const fn quarter_turns_to(self, target: Self) -> i32 {
        let diff = (target as i32 - self as i32).rem_euclid(4);
        if diff == 3 {
            -1
        } else {
            diff
        }
    }

    /// Stable lowercase name used in JSON artifacts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
