//! `Board`: the tile grid plus the bot's position and facing.
//!
//! # Ownership
//!
//! A `Board` is a plain value. `Clone` is a deep copy, and every subsystem
//! that needs a scratch board (diagnostics, planning, execution on behalf
//! of a session) clones first. Nothing aliases a board across mutators.
//!
//! # Out-of-bounds semantics
//!
//! [`Board::get`] returns `None` off the grid. Callers decide what absence
//! means: the bot treats it like a wall, the graph builder as "no edge".

use crate::board::direction::{Direction, Position};
use crate::board::tile::TileKind;

/// Typed failure for board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The grid has no rows or its first row has no tiles.
    Empty,
    /// A row's width differs from the first row's width.
    NotRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// No tile of kind `Start`; the bot cannot be placed.
    MissingStart,
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "board has no tiles"),
            Self::NotRectangular {
                row,
                expected,
                actual,
            } => write!(
                f,
                "board is not rectangular: row {row} has {actual} tiles, expected {expected}"
            ),
            Self::MissingStart => write!(f, "board is missing required tile: start"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Rectangular tile grid with the bot's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major tiles, `width * height` entries.
    tiles: Vec<TileKind>,
    width: usize,
    height: usize,
    bot_position: Position,
    bot_facing: Direction,
}

impl Board {
    /// Build a board and place the bot on the first `Start` tile.
    ///
    /// More than one `Start` is accepted here; diagnostics report it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the grid is empty, ragged, or has no
    /// `Start` tile.
    pub fn new(rows: Vec<Vec<TileKind>>, facing: Direction) -> Result<Self, BoardError> {
        let board = Self::from_rows_unchecked(rows, facing)?;
        if board.start_position().is_none() {
            return Err(BoardError::MissingStart);
        }
        Ok(board)
    }

    /// Build a board without requiring a `Start` tile (editor use).
    ///
    /// The bot sits on the first `Start` tile if there is one, otherwise at
    /// the origin.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Empty`] or [`BoardError::NotRectangular`].
    pub fn from_rows_unchecked(
        rows: Vec<Vec<TileKind>>,
        facing: Direction,
    ) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(BoardError::Empty);
        }
        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(BoardError::NotRectangular {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            tiles.extend(cells);
        }
        let mut board = Self {
            tiles,
            width,
            height,
            bot_position: Position::new(0, 0),
            bot_facing: facing,
        };
        if let Some(start) = board.start_position() {
            board.bot_position = start;
        }
        Ok(board)
    }

    /// Width in tiles.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major index of `pos`, or `None` if off the grid.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Position of a row-major index. Caller guarantees `index < width * height`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn position_at(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Tile at `pos`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<TileKind> {
        self.index_of(pos).map(|i| self.tiles[i])
    }

    /// Overwrite the tile at `pos`. Returns `false` if `pos` is off the grid.
    pub fn set(&mut self, pos: Position, kind: TileKind) -> bool {
        match self.index_of(pos) {
            Some(i) => {
                self.tiles[i] = kind;
                true
            }
            None => false,
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.tiles.len()).map(|i| self.position_at(i))
    }

    /// First position (row-major) holding `kind`.
    #[must_use]
    pub fn position_of(&self, kind: TileKind) -> Option<Position> {
        self.tiles
            .iter()
            .position(|&t| t == kind)
            .map(|i| self.position_at(i))
    }

    /// Every position (row-major) holding `kind`.
    #[must_use]
    pub fn positions_of(&self, kind: TileKind) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, &t)| t == kind)
            .map(|(i, _)| self.position_at(i))
            .collect()
    }

    /// Number of tiles of `kind`.
    #[must_use]
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }

    /// Whether any coin is left on the board.
    #[must_use]
    pub fn has_coins(&self) -> bool {
        self.tiles.contains(&TileKind::Coin)
    }

    #[must_use]
    pub fn start_position(&self) -> Option<Position> {
        self.position_of(TileKind::Start)
    }

    #[must_use]
    pub fn door_position(&self) -> Option<Position> {
        self.position_of(TileKind::Door)
    }

    #[must_use]
    pub fn bot_position(&self) -> Position {
        self.bot_position
    }

    #[must_use]
    pub fn bot_facing(&self) -> Direction {
        self.bot_facing
    }

    /// Move the bot without any game-rule checks.
    pub fn place_bot(&mut self, pos: Position) {
        self.bot_position = pos;
    }

    pub fn set_facing(&mut self, facing: Direction) {
        self.bot_facing = facing;
    }

    /// Copy of the grid as rows (level encoding, editors).
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<TileKind>> {
        self.tiles
            .chunks(self.width)
            .map(<[TileKind]>::to_vec)
            .collect()
    }
}
