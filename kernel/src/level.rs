//! Level codec: the JSON level file format.
//!
//! ```json
//! {"name": "optional", "field": [[4, 3, 2]], "botRotation": 1}
//! ```
//!
//! `field` is a row-major matrix of tile codes and `botRotation` a
//! direction code. Decoding validates everything up front: a [`Level`]
//! always holds a rectangular board with a start tile.

use crate::board::{Board, BoardError, Direction, Position, TileKind};
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

pub const KEY_NAME: &str = "name";
pub const KEY_FIELD: &str = "field";
pub const KEY_ROTATION: &str = "botRotation";

/// Typed failure for level decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Input is not JSON at all.
    MalformedJson { detail: String },
    /// A required key is absent.
    MissingKey { key: &'static str },
    /// A value has the wrong JSON type. `path` is e.g. `field[2][5]`.
    UnexpectedType {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },
    /// An integer is not a valid tile or direction code.
    CodeOutOfRange { path: String, code: i64 },
    NotRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },
    EmptyField,
    /// The grid has no start tile.
    MissingStart,
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedJson { detail } => write!(f, "level is not valid JSON: {detail}"),
            Self::MissingKey { key } => write!(f, "level is missing required key: {key}"),
            Self::UnexpectedType {
                path,
                expected,
                actual,
            } => write!(f, "expected {expected} for \"{path}\", got {actual}"),
            Self::CodeOutOfRange { path, code } => {
                write!(f, "code {code} at \"{path}\" is out of range")
            }
            Self::NotRectangular {
                row,
                expected,
                actual,
            } => write!(
                f,
                "field is not rectangular: row {row} has {actual} tiles, expected {expected}"
            ),
            Self::EmptyField => write!(f, "field has no tiles"),
            Self::MissingStart => write!(f, "field is missing required tile: start"),
        }
    }
}

impl std::error::Error for LevelError {}

impl From<BoardError> for LevelError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::Empty => Self::EmptyField,
            BoardError::NotRectangular {
                row,
                expected,
                actual,
            } => Self::NotRectangular {
                row,
                expected,
                actual,
            },
            BoardError::MissingStart => Self::MissingStart,
        }
    }
}

/// A decoded level: optional name plus the starting board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: Option<String>,
    board: Board,
}

impl Level {
    /// Wrap a board. The bot's current facing becomes the start facing.
    #[must_use]
    pub fn new(name: Option<String>, board: Board) -> Self {
        Self { name, board }
    }

    /// Validate a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Any [`LevelError`] except `MalformedJson`.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, LevelError> {
        let object = value.as_object().ok_or_else(|| LevelError::UnexpectedType {
            path: "$".to_string(),
            expected: "object",
            actual: json_type(value),
        })?;

        let field = object
            .get(KEY_FIELD)
            .ok_or(LevelError::MissingKey { key: KEY_FIELD })?;
        let rotation = object
            .get(KEY_ROTATION)
            .ok_or(LevelError::MissingKey { key: KEY_ROTATION })?;

        let name = match object.get(KEY_NAME) {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(LevelError::UnexpectedType {
                    path: KEY_NAME.to_string(),
                    expected: "string",
                    actual: json_type(other),
                })
            }
        };

        let rows = decode_field(field)?;
        let facing = decode_direction(rotation)?;
        let board = Board::new(rows, facing)?;
        Ok(Self { name, board })
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(default)
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// A fresh copy of the starting board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    #[must_use]
    pub fn start_facing(&self) -> Direction {
        self.board.bot_facing()
    }

    #[must_use]
    pub fn start_position(&self) -> Position {
        self.board.bot_position()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let field: Vec<Vec<u8>> = self
            .board
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(TileKind::code).collect())
            .collect();
        let mut object = serde_json::Map::new();
        if let Some(name) = &self.name {
            object.insert(KEY_NAME.to_string(), serde_json::Value::String(name.clone()));
        }
        object.insert(KEY_FIELD.to_string(), serde_json::json!(field));
        object.insert(
            KEY_ROTATION.to_string(),
            serde_json::json!(self.start_facing().code()),
        );
        serde_json::Value::Object(object)
    }

    /// Content hash of [`encode_level`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(HashDomain::Level, &encode_level(self)?))
    }
}

/// Decode level JSON bytes.
///
/// # Errors
///
/// [`LevelError::MalformedJson`] if the bytes do not parse, otherwise see
/// [`Level::from_value`].
pub fn decode_level(bytes: &[u8]) -> Result<Level, LevelError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| LevelError::MalformedJson {
            detail: e.to_string(),
        })?;
    Level::from_value(&value)
}

/// Encode a level as canonical JSON bytes.
///
/// # Errors
///
/// Propagates [`CanonError`]; level JSON only holds integers and strings.
pub fn encode_level(level: &Level) -> Result<Vec<u8>, CanonError> {
    canonical_json_bytes(&level.to_json_value())
}

fn decode_field(field: &serde_json::Value) -> Result<Vec<Vec<TileKind>>, LevelError> {
    let rows = field.as_array().ok_or_else(|| LevelError::UnexpectedType {
        path: KEY_FIELD.to_string(),
        expected: "array",
        actual: json_type(field),
    })?;

    let mut out = Vec::with_capacity(rows.len());
    for (y, row) in rows.iter().enumerate() {
        let cells = row.as_array().ok_or_else(|| LevelError::UnexpectedType {
            path: format!("{KEY_FIELD}[{y}]"),
            expected: "array",
            actual: json_type(row),
        })?;
        let mut tiles = Vec::with_capacity(cells.len());
        for (x, cell) in cells.iter().enumerate() {
            let path = format!("{KEY_FIELD}[{y}][{x}]");
            let code = integer(cell, &path)?;
            let tile = u8::try_from(code)
                .ok()
                .and_then(TileKind::from_code)
                .ok_or(LevelError::CodeOutOfRange { path, code })?;
            tiles.push(tile);
        }
        out.push(tiles);
    }
    Ok(out)
}

fn decode_direction(value: &serde_json::Value) -> Result<Direction, LevelError> {
    let code = integer(value, KEY_ROTATION)?;
    u8::try_from(code)
        .ok()
        .and_then(Direction::from_code)
        .ok_or(LevelError::CodeOutOfRange {
            path: KEY_ROTATION.to_string(),
            code,
        })
}

fn integer(value: &serde_json::Value, path: &str) -> Result<i64, LevelError> {
    value.as_i64().ok_or_else(|| LevelError::UnexpectedType {
        path: path.to_string(),
        expected: "integer",
        actual: json_type(value),
    })
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
