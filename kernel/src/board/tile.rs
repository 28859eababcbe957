//! Tile kinds and their movement flags.

/// A single board tile.
///
/// The discriminant is the integer code used by level files. Codes are
/// part of the level format and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TileKind {
    /// Cannot be entered; a one-wide abyss can be jumped over.
    Abyss = 0,
    /// Collected when entered, then becomes [`TileKind::Normal`].
    Coin = 1,
    /// The level exit. Opened by `Exit` from the adjacent tile.
    Door = 2,
    /// Plain floor.
    Normal = 3,
    /// Where the bot starts.
    Start = 4,
    /// Cannot be entered or jumped over.
    Wall = 5,
}

impl TileKind {
    /// All tile kinds in code order.
    pub const ALL: [TileKind; 6] = [
        Self::Abyss,
        Self::Coin,
        Self::Door,
        Self::Normal,
        Self::Start,
        Self::Wall,
    ];

    /// Decode a level-file tile code. Returns `None` for unknown codes.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Abyss),
            1 => Some(Self::Coin),
            2 => Some(Self::Door),
            3 => Some(Self::Normal),
            4 => Some(Self::Start),
            5 => Some(Self::Wall),
            _ => None,
        }
    }

    /// The level-file tile code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the bot may stand on this tile.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        matches!(
            self,
            Self::Coin | Self::Door | Self::Normal | Self::Start
        )
    }

    /// Whether the bot may jump over this tile.
    #[must_use]
    pub const fn is_jumpable(self) -> bool {
        matches!(self, Self::Abyss)
    }

    /// Stable lowercase name used in JSON artifacts and CLI output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abyss => "abyss",
            Self::Coin => "coin",
            Self::Door => "door",
            Self::Normal => "normal",
            Self::Start => "start",
            Self::Wall => "wall",
        }
    }

    /// Player-facing rule text for this tile.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Abyss => {
                "Cannot be entered by the bot. An abyss exactly one tile wide can be jumped over."
            }
            Self::Coin => {
                "Collected when the bot enters it; the tile becomes normal. \
                 The door only opens once every coin is collected."
            }
            Self::Door => "Opening the door wins the level. Exactly one door per level.",
            Self::Normal => "A plain, empty tile.",
            Self::Start => {
                "The bot starts here, facing the level's start direction. \
                 Exactly one start tile per level."
            }
            Self::Wall => "Cannot be entered or jumped over.",
        }
    }
}

/// `None`-tolerant walkability check for out-of-bounds lookups.
#[must_use]
pub fn is_walkable(tile: Option<TileKind>) -> bool {
    tile.is_some_and(TileKind::is_walkable)
}

/// `None`-tolerant jumpability check for out-of-bounds lookups.
#[must_use]
pub fn is_jumpable(tile: Option<TileKind>) -> bool {
    tile.is_some_and(TileKind::is_jumpable)
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
