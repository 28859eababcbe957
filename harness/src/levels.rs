//! Built-in levels: the tutorial levels plus an empty editor template.
//!
//! Stored as level JSON so they exercise the same decoder as files on disk.

use tilebot_kernel::level::{decode_level, Level, LevelError};

pub const LEVEL_0: &str = r#"{
  "name": "Level 0",
  "botRotation": 1,
  "field": [
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [1, 4, 3, 3, 0, 3, 3, 2],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5]
  ]
}"#;

pub const LEVEL_1: &str = r#"{
  "name": "Level 1",
  "botRotation": 1,
  "field": [
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [4, 3, 3, 3, 3, 3, 3, 2],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5]
  ]
}"#;

pub const LEVEL_2: &str = r#"{
  "name": "Level 2",
  "botRotation": 1,
  "field": [
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [4, 3, 3, 3, 0, 3, 3, 3],
    [5, 5, 5, 5, 5, 5, 5, 3],
    [2, 3, 3, 3, 0, 3, 3, 3],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5]
  ]
}"#;

pub const LEVEL_3: &str = r#"{
  "name": "Level 3",
  "botRotation": 1,
  "field": [
    [4, 3, 3, 3, 3, 3, 3, 1],
    [5, 3, 0, 0, 0, 0, 0, 3],
    [2, 3, 0, 0, 0, 0, 0, 3],
    [3, 0, 0, 0, 0, 0, 0, 3],
    [3, 0, 0, 0, 0, 0, 0, 3],
    [3, 0, 0, 0, 0, 0, 0, 3],
    [3, 0, 0, 0, 0, 0, 0, 3],
    [1, 3, 3, 3, 3, 3, 3, 1]
  ]
}"#;

pub const LEVEL_4: &str = r#"{
  "name": "Level 4",
  "botRotation": 2,
  "field": [
    [4, 5, 3, 3, 3, 5, 5, 5],
    [3, 5, 3, 5, 3, 5, 5, 5],
    [3, 5, 3, 5, 3, 5, 5, 5],
    [3, 5, 3, 5, 3, 5, 5, 5],
    [3, 5, 3, 5, 3, 5, 5, 5],
    [3, 5, 3, 5, 3, 5, 5, 5],
    [3, 5, 3, 5, 3, 5, 5, 5],
    [3, 3, 3, 5, 3, 3, 3, 2]
  ]
}"#;

pub const LEVEL_5: &str = r#"{
  "name": "Level 5",
  "botRotation": 1,
  "field": [
    [4, 3, 3, 3, 3, 3, 3, 3],
    [5, 3, 0, 0, 3, 0, 0, 3],
    [2, 3, 0, 0, 3, 0, 0, 3],
    [3, 0, 0, 0, 3, 0, 0, 3],
    [3, 3, 3, 3, 1, 3, 3, 3],
    [3, 0, 0, 0, 3, 0, 0, 3],
    [3, 0, 0, 0, 3, 0, 0, 3],
    [1, 3, 3, 3, 3, 3, 3, 3]
  ]
}"#;

pub const EMPTY_LEVEL: &str = r#"{
  "name": "Empty level",
  "botRotation": 1,
  "field": [
    [4, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5, 5, 5, 5]
  ]
}"#;

/// Built-in levels by short name, in play order.
pub const BUILTIN: [(&str, &str); 6] = [
    ("level0", LEVEL_0),
    ("level1", LEVEL_1),
    ("level2", LEVEL_2),
    ("level3", LEVEL_3),
    ("level4", LEVEL_4),
    ("level5", LEVEL_5),
];

/// Level JSON for a built-in short name. `"empty"` is the editor template.
#[must_use]
pub fn source(name: &str) -> Option<&'static str> {
    if name == "empty" {
        return Some(EMPTY_LEVEL);
    }
    BUILTIN
        .iter()
        .find(|(short, _)| *short == name)
        .map(|(_, json)| *json)
}

/// Decode a built-in level.
///
/// Returns `None` for an unknown name.
///
/// # Errors
///
/// [`LevelError`] only if a built-in fixture is broken.
pub fn load(name: &str) -> Option<Result<Level, LevelError>> {
    source(name).map(|json| decode_level(json.as_bytes()))
}

/// Decode every playable built-in level, in order.
///
/// # Errors
///
/// The first [`LevelError`] among the fixtures.
pub fn all() -> Result<Vec<(&'static str, Level)>, LevelError> {
    BUILTIN
        .iter()
        .map(|(name, json)| decode_level(json.as_bytes()).map(|level| (*name, level)))
        .collect()
}
