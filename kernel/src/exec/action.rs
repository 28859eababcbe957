//! Actions and the append-only action log.
//!
//! The log is the only artifact of a run. Presentation replays it; tests and
//! the run report hash its canonical JSON.

use crate::board::{Direction, Position};
use crate::program::ProcedureId;
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    Move,
    TurnLeft,
    TurnRight,
    Jump,
    RunIntoWall,
    FallIntoAbyss,
    CollectCoin,
    ExitSuccessful,
    ExitFailed,
    StartExecuteP1,
    StartExecuteP2,
    StopExecuteP1,
    StopExecuteP2,
    /// Bot placement before the first instruction. Only sessions emit it.
    Start,
}

impl ActionKind {
    /// Terminal failure: execution stops after the first one.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(
            self,
            Self::RunIntoWall | Self::FallIntoAbyss | Self::ExitFailed
        )
    }

    /// Call bracket markers.
    #[must_use]
    pub const fn is_marker(self) -> bool {
        matches!(
            self,
            Self::StartExecuteP1 | Self::StartExecuteP2 | Self::StopExecuteP1 | Self::StopExecuteP2
        )
    }

    /// Opening marker for a call into `callee`.
    #[must_use]
    pub const fn start_of(callee: ProcedureId) -> Self {
        match callee {
            ProcedureId::P2 => Self::StartExecuteP2,
            ProcedureId::Root | ProcedureId::P1 => Self::StartExecuteP1,
        }
    }

    /// Closing marker for a call into `callee`.
    #[must_use]
    pub const fn stop_of(callee: ProcedureId) -> Self {
        match callee {
            ProcedureId::P2 => Self::StopExecuteP2,
            ProcedureId::Root | ProcedureId::P1 => Self::StopExecuteP1,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::TurnLeft => "turn_left",
            Self::TurnRight => "turn_right",
            Self::Jump => "jump",
            Self::RunIntoWall => "run_into_wall",
            Self::FallIntoAbyss => "fall_into_abyss",
            Self::CollectCoin => "collect_coin",
            Self::ExitSuccessful => "exit_successful",
            Self::ExitFailed => "exit_failed",
            Self::StartExecuteP1 => "start_execute_p1",
            Self::StartExecuteP2 => "start_execute_p2",
            Self::StopExecuteP1 => "stop_execute_p1",
            Self::StopExecuteP2 => "stop_execute_p2",
            Self::Start => "start",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One immutable log record.
///
/// Marker actions carry no position or facing. Every other action carries
/// the bot's position and facing when it happened, plus a destination for
/// moves, jumps and coin pickups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    kind: ActionKind,
    position: Option<Position>,
    facing: Option<Direction>,
    destination: Option<Position>,
    procedure: Option<ProcedureId>,
    instruction: Option<usize>,
}

/// The board-visible part of an action, without procedure tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionEffect {
    pub kind: ActionKind,
    pub position: Option<Position>,
    pub facing: Option<Direction>,
    pub destination: Option<Position>,
}

impl Action {
    /// An untagged action at `position`.
    #[must_use]
    pub const fn at(
        kind: ActionKind,
        position: Position,
        facing: Direction,
        destination: Option<Position>,
    ) -> Self {
        Self {
            kind,
            position: Some(position),
            facing: Some(facing),
            destination,
            procedure: None,
            instruction: None,
        }
    }

    /// A call marker tagged with the caller and the call's index in it.
    #[must_use]
    pub const fn marker(kind: ActionKind, procedure: ProcedureId, instruction: usize) -> Self {
        Self {
            kind,
            position: None,
            facing: None,
            destination: None,
            procedure: Some(procedure),
            instruction: Some(instruction),
        }
    }

    /// Copy with procedure/instruction tags set.
    #[must_use]
    pub const fn tagged(mut self, procedure: ProcedureId, instruction: usize) -> Self {
        self.procedure = Some(procedure);
        self.instruction = Some(instruction);
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        self.kind
    }

    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    #[must_use]
    pub const fn facing(&self) -> Option<Direction> {
        self.facing
    }

    /// Where the action ended; falls back to `position` when the action has
    /// no separate destination.
    #[must_use]
    pub fn destination(&self) -> Option<Position> {
        self.destination.or(self.position)
    }

    #[must_use]
    pub const fn procedure(&self) -> Option<ProcedureId> {
        self.procedure
    }

    #[must_use]
    pub const fn instruction(&self) -> Option<usize> {
        self.instruction
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.kind.is_failure()
    }

    #[must_use]
    pub const fn effect(&self) -> ActionEffect {
        ActionEffect {
            kind: self.kind,
            position: self.position,
            facing: self.facing,
            destination: self.destination,
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        fn pos(p: Option<Position>) -> serde_json::Value {
            p.map_or(serde_json::Value::Null, |p| serde_json::json!([p.x, p.y]))
        }
        serde_json::json!({
            "kind": self.kind.name(),
            "position": pos(self.position),
            "facing": self.facing.map(Direction::name),
            "destination": pos(self.destination),
            "procedure": self.procedure.map(ProcedureId::index),
            "instruction": self.instruction,
        })
    }
}

/// Append-only, ordered action log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    #[must_use]
    pub fn first_failure(&self) -> Option<&Action> {
        self.actions.iter().find(|a| a.is_failure())
    }

    #[must_use]
    pub fn failed(&self) -> bool {
        self.first_failure().is_some()
    }

    /// No failure and exactly one `ExitSuccessful`.
    #[must_use]
    pub fn successful(&self) -> bool {
        !self.failed()
            && self
                .actions
                .iter()
                .filter(|a| a.kind() == ActionKind::ExitSuccessful)
                .count()
                == 1
    }

    /// Copy without call bracket markers.
    #[must_use]
    pub fn without_markers(&self) -> ActionLog {
        self.actions
            .iter()
            .filter(|a| !a.kind().is_marker())
            .copied()
            .collect()
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<ActionKind> {
        self.actions.iter().map(Action::kind).collect()
    }

    /// Board-visible effects, ignoring procedure tags.
    #[must_use]
    pub fn effects(&self) -> Vec<ActionEffect> {
        self.actions.iter().map(Action::effect).collect()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(self.actions.iter().map(Action::to_json_value).collect())
    }

    /// # Errors
    ///
    /// Propagates [`CanonError`]; action JSON only holds integers, so this
    /// does not fail in practice.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// See [`ActionLog::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::ActionLog,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

impl FromIterator<Action> for ActionLog {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Action> for ActionLog {
    fn extend<I: IntoIterator<Item = Action>>(&mut self, iter: I) {
        self.actions.extend(iter);
    }
}

impl IntoIterator for ActionLog {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
