//! Single-instruction bot stepper.
//!
//! A [`Bot`] borrows a live board mutably and turns one instruction into the
//! actions it causes. Actions come back untagged; the interpreter tags them
//! with the procedure slot and instruction index.

use crate::board::tile::{is_jumpable, is_walkable};
use crate::board::{Board, Direction, Position, TileKind};
use crate::exec::action::{Action, ActionKind};
use crate::exec::error::ExecError;
use crate::program::Instruction;

/// Tiles covered by one jump.
pub const JUMP_DISTANCE: i32 = 2;

/// The bot, acting on a borrowed board.
pub struct Bot<'a> {
    board: &'a mut Board,
}

impl<'a> Bot<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self { board }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.board.bot_position()
    }

    #[must_use]
    pub fn facing(&self) -> Direction {
        self.board.bot_facing()
    }

    fn action(&self, kind: ActionKind, destination: Option<Position>) -> Action {
        Action::at(kind, self.position(), self.facing(), destination)
    }

    /// Put the bot on `pos`, collecting a coin there.
    fn land(&mut self, pos: Position) -> Option<Action> {
        let mut pickup = None;
        if self.board.get(pos) == Some(TileKind::Coin) {
            self.board.set(pos, TileKind::Normal);
            pickup = Some(self.action(ActionKind::CollectCoin, Some(pos)));
        }
        self.board.place_bot(pos);
        pickup
    }

    /// One tile ahead. Always emits `Move`; a blocked or fatal destination
    /// adds `RunIntoWall` or `FallIntoAbyss` and the bot stays put.
    pub fn forward(&mut self) -> Vec<Action> {
        let destination = self.position().offset(self.facing(), 1);
        let mut actions = vec![self.action(ActionKind::Move, Some(destination))];
        let tile = self.board.get(destination);
        match tile {
            _ if is_walkable(tile) => actions.extend(self.land(destination)),
            Some(TileKind::Abyss) => actions.push(Action::at(
                ActionKind::FallIntoAbyss,
                destination,
                self.facing(),
                None,
            )),
            _ => actions.push(Action::at(
                ActionKind::RunIntoWall,
                destination,
                self.facing(),
                None,
            )),
        }
        actions
    }

    pub fn turn_left(&mut self) -> Vec<Action> {
        self.board.set_facing(self.facing().rotate(-1));
        vec![self.action(ActionKind::TurnLeft, None)]
    }

    pub fn turn_right(&mut self) -> Vec<Action> {
        self.board.set_facing(self.facing().rotate(1));
        vec![self.action(ActionKind::TurnRight, None)]
    }

    /// Jump over one jumpable tile onto a walkable one. Any other layout,
    /// including off-board tiles, is `RunIntoWall` at the bot's position.
    pub fn jump(&mut self) -> Vec<Action> {
        let over = self.position().offset(self.facing(), 1);
        let destination = self.position().offset(self.facing(), JUMP_DISTANCE);
        if is_walkable(self.board.get(destination)) && is_jumpable(self.board.get(over)) {
            let mut actions = vec![self.action(ActionKind::Jump, Some(destination))];
            actions.extend(self.land(destination));
            actions
        } else {
            vec![self.action(ActionKind::RunIntoWall, Some(destination))]
        }
    }

    /// Succeeds iff the door is directly ahead and no coin is left.
    pub fn exit(&mut self) -> Vec<Action> {
        let ahead = self.position().offset(self.facing(), 1);
        let at_door = self.board.get(ahead) == Some(TileKind::Door);
        let kind = if at_door && !self.board.has_coins() {
            ActionKind::ExitSuccessful
        } else {
            ActionKind::ExitFailed
        };
        vec![self.action(kind, None)]
    }

    /// Run one non-call instruction.
    ///
    /// # Errors
    ///
    /// [`ExecError::CallOutsideProcedure`] for `CallP1`/`CallP2`.
    pub fn step(&mut self, instruction: Instruction) -> Result<Vec<Action>, ExecError> {
        Ok(match instruction {
            Instruction::Forward => self.forward(),
            Instruction::TurnLeft => self.turn_left(),
            Instruction::TurnRight => self.turn_right(),
            Instruction::Jump => self.jump(),
            Instruction::Exit => self.exit(),
            Instruction::CallP1 | Instruction::CallP2 => {
                return Err(ExecError::CallOutsideProcedure { instruction });
            }
        })
    }
}
