//! Procedure interpreter.
//!
//! Runs a root procedure and two child procedures against a live board with
//! an explicit frame stack. Legal procedures nest at most three deep (root,
//! one child, the other child), so the stack stays tiny.
//!
//! # Tagging
//!
//! Every bot action is tagged with the slot of the procedure that ran it and
//! the instruction's index inside that procedure. A call pushes a
//! `StartExecutePn` marker tagged with the caller's slot and the call's
//! index; the matching `StopExecutePn` carries the same tag.
//!
//! # Halting
//!
//! The first failure action stops every frame. Frames still open at that
//! point append their `Stop` markers while unwinding, so brackets always
//! balance.

use crate::board::Board;
use crate::exec::action::{Action, ActionKind, ActionLog};
use crate::exec::bot::Bot;
use crate::exec::error::ExecError;
use crate::program::{contains_illegal_recursion, exit_count, Procedure, ProcedureId};

/// Where a child frame was called from.
struct CallSite {
    caller: ProcedureId,
    index: usize,
    callee: ProcedureId,
}

struct Frame<'p> {
    slot: ProcedureId,
    body: &'p Procedure,
    cursor: usize,
    call_site: Option<CallSite>,
}

/// Execute `root` with `p1` and `p2` available as child procedures.
///
/// `board` is the live board: the bot moves and coins are collected on it.
/// Callers that need to keep their board pass a clone.
///
/// # Errors
///
/// Checked before any action is produced:
/// - [`ExecError::IllegalRecursion`] if the children can recurse forever.
/// - [`ExecError::ExitCount`] unless exactly one `Exit` exists overall.
pub fn execute(
    board: &mut Board,
    root: &Procedure,
    p1: &Procedure,
    p2: &Procedure,
) -> Result<ActionLog, ExecError> {
    if contains_illegal_recursion(p1, p2) {
        return Err(ExecError::IllegalRecursion);
    }
    let exits = exit_count(root, p1, p2);
    if exits != 1 {
        return Err(ExecError::ExitCount { found: exits });
    }

    let mut log = ActionLog::new();
    let mut halted = false;
    let mut stack = vec![Frame {
        slot: ProcedureId::Root,
        body: root,
        cursor: 0,
        call_site: None,
    }];

    while let Some(frame) = stack.last_mut() {
        let next = if halted {
            None
        } else {
            frame.body.get(frame.cursor)
        };
        let Some(instruction) = next else {
            if let Some(site) = stack.pop().and_then(|done| done.call_site) {
                log.push(Action::marker(
                    ActionKind::stop_of(site.callee),
                    site.caller,
                    site.index,
                ));
            }
            continue;
        };

        let slot = frame.slot;
        let index = frame.cursor;
        frame.cursor += 1;

        if let Some(callee) = instruction.callee() {
            log.push(Action::marker(ActionKind::start_of(callee), slot, index));
            let body = if callee == ProcedureId::P1 { p1 } else { p2 };
            stack.push(Frame {
                slot: callee,
                body,
                cursor: 0,
                call_site: Some(CallSite {
                    caller: slot,
                    index,
                    callee,
                }),
            });
        } else {
            for action in Bot::new(board).step(instruction)? {
                halted |= action.is_failure();
                log.push(action.tagged(slot, index));
            }
        }
    }

    Ok(log)
}
