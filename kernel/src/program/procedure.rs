//! Procedures and the static legality checks run before execution.

use crate::program::instruction::Instruction;

/// Identity of a procedure slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ProcedureId {
    Root = 0,
    P1 = 1,
    P2 = 2,
}

impl ProcedureId {
    pub const ALL: [ProcedureId; 3] = [Self::Root, Self::P1, Self::P2];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The sibling child. `Root` has none.
    #[must_use]
    pub const fn other(self) -> Option<Self> {
        match self {
            Self::Root => None,
            Self::P1 => Some(Self::P2),
            Self::P2 => Some(Self::P1),
        }
    }
}

impl std::fmt::Display for ProcedureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::P1 => f.write_str("p1"),
            Self::P2 => f.write_str("p2"),
        }
    }
}

/// An ordered instruction list with a slot identity.
///
/// Capacity is not enforced here; the optimizer and diagnostics report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Procedure {
    id: ProcedureId,
    instructions: Vec<Instruction>,
}

impl Procedure {
    #[must_use]
    pub fn new(id: ProcedureId, instructions: Vec<Instruction>) -> Self {
        Self { id, instructions }
    }

    #[must_use]
    pub fn empty(id: ProcedureId) -> Self {
        Self::new(id, Vec::new())
    }

    #[must_use]
    pub fn id(&self) -> ProcedureId {
        self.id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Instruction> {
        self.instructions.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.instructions.iter().copied()
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// How often `target` occurs.
    #[must_use]
    pub fn count(&self, target: Instruction) -> usize {
        self.instructions.iter().filter(|&&i| i == target).count()
    }

    #[must_use]
    pub fn contains(&self, target: Instruction) -> bool {
        self.instructions.contains(&target)
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// JSON projection: array of instruction names.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.instructions
                .iter()
                .map(|i| serde_json::Value::String(i.name().to_string()))
                .collect(),
        )
    }
}

/// Whether the child procedures can recurse forever.
///
/// Illegal: a child that calls itself, or two children that call each
/// other.
#[must_use]
pub fn contains_illegal_recursion(p1: &Procedure, p2: &Procedure) -> bool {
    p1.contains(Instruction::CallP1)
        || p2.contains(Instruction::CallP2)
        || (p1.contains(Instruction::CallP2) && p2.contains(Instruction::CallP1))
}

/// Total `Exit` instructions across all three procedures.
#[must_use]
pub fn exit_count(root: &Procedure, p1: &Procedure, p2: &Procedure) -> usize {
    [root, p1, p2]
        .iter()
        .map(|p| p.count(Instruction::Exit))
        .sum()
}

/// Whether the procedures may be executed: no illegal recursion and exactly
/// one `Exit`.
#[must_use]
pub fn verify(root: &Procedure, p1: &Procedure, p2: &Procedure) -> bool {
    !contains_illegal_recursion(p1, p2) && exit_count(root, p1, p2) == 1
}
