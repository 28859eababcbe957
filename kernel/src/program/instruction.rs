//! The seven instructions a procedure can hold.

use crate::board::Direction;
use crate::program::procedure::ProcedureId;

/// A single program instruction.
///
/// `CallP1` and `CallP2` are recursion markers: only the procedure
/// interpreter can run them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Instruction {
    Forward = 0,
    TurnLeft = 1,
    TurnRight = 2,
    Jump = 3,
    Exit = 4,
    CallP1 = 5,
    CallP2 = 6,
}

impl Instruction {
    pub const ALL: [Instruction; 7] = [
        Self::Forward,
        Self::TurnLeft,
        Self::TurnRight,
        Self::Jump,
        Self::Exit,
        Self::CallP1,
        Self::CallP2,
    ];

    /// Stable integer code. Also the tie-break order for the optimizer.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Snake-case name used in JSON artifacts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::TurnLeft => "turn_left",
            Self::TurnRight => "turn_right",
            Self::Jump => "jump",
            Self::Exit => "exit",
            Self::CallP1 => "call_p1",
            Self::CallP2 => "call_p2",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.name() == name)
    }

    /// Whether this is a recursion marker.
    #[must_use]
    pub const fn is_call(self) -> bool {
        matches!(self, Self::CallP1 | Self::CallP2)
    }

    /// The procedure a call marker runs.
    #[must_use]
    pub const fn callee(self) -> Option<ProcedureId> {
        match self {
            Self::CallP1 => Some(ProcedureId::P1),
            Self::CallP2 => Some(ProcedureId::P2),
            _ => None,
        }
    }

    /// The call marker for a child procedure. `Root` cannot be called.
    #[must_use]
    pub const fn call_for(id: ProcedureId) -> Option<Self> {
        match id {
            ProcedureId::Root => None,
            ProcedureId::P1 => Some(Self::CallP1),
            ProcedureId::P2 => Some(Self::CallP2),
        }
    }

    /// Rule text shown next to the instruction in an editor.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Forward => {
                "The bot moves one tile forward in its current orientation. \
                 Only works if the target tile is normal, a coin, the start or the door."
            }
            Self::TurnLeft => "The bot rotates 90° to the left.",
            Self::TurnRight => "The bot rotates 90° to the right.",
            Self::Jump => {
                "The bot jumps over exactly one tile in its current orientation. \
                 Only works if the tile in front is an abyss and the tile after it \
                 is normal, a coin, the start or the door."
            }
            Self::Exit => {
                "The door is opened. Only works if the bot stands directly in front of \
                 the door, facing it, and no coins are left. Exactly one exit is allowed \
                 across all procedures."
            }
            Self::CallP1 => {
                "Runs procedure 1, then continues with the next instruction. \
                 Procedure 1 may not call itself, and the two procedures may not call each other."
            }
            Self::CallP2 => {
                "Runs procedure 2, then continues with the next instruction. \
                 Procedure 2 may not call itself, and the two procedures may not call each other."
            }
        }
    }
}

/// Minimal turn sequence that rotates `from` into `to`.
///
/// One turn for a quarter rotation, two `TurnRight` for a reversal.
#[must_use]
pub fn turns_between(from: Direction, to: Direction) -> Vec<Instruction> {
    match from.quarter_turns_to(to) {
        0 => Vec::new(),
        1 => vec![Instruction::TurnRight],
        -1 => vec![Instruction::TurnLeft],
        _ => vec![Instruction::TurnRight, Instruction::TurnRight],
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
