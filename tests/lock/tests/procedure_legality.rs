//! Procedure legality: rejected programs never produce an action and never
//! touch the board.

use lock_tests::boards::{board, procedures};
use tilebot_kernel::board::Direction;
use tilebot_kernel::exec::{execute, ExecError};
use tilebot_kernel::program::{verify, Instruction};

use Instruction::{CallP1, CallP2, Exit, Forward, TurnLeft};

fn assert_rejected(
    root: &[Instruction],
    p1: &[Instruction],
    p2: &[Instruction],
    expected: &ExecError,
) {
    let mut b = board(&["Sc.D"], Direction::East);
    let before = b.clone();
    let [r, a, c] = procedures(root, p1, p2);
    assert!(!verify(&r, &a, &c));
    assert_eq!(execute(&mut b, &r, &a, &c).as_ref(), Err(expected));
    assert_eq!(b, before, "a rejected program must leave the board untouched");
}

#[test]
fn p1_calling_itself_is_illegal() {
    assert_rejected(
        &[CallP1, Exit],
        &[Forward, CallP1],
        &[],
        &ExecError::IllegalRecursion,
    );
}

#[test]
fn p2_calling_itself_is_illegal() {
    assert_rejected(
        &[CallP2, Exit],
        &[],
        &[CallP2],
        &ExecError::IllegalRecursion,
    );
}

#[test]
fn children_calling_each_other_is_illegal() {
    assert_rejected(
        &[CallP1, Exit],
        &[CallP2],
        &[TurnLeft, CallP1],
        &ExecError::IllegalRecursion,
    );
}

#[test]
fn recursion_is_reported_before_the_exit_count() {
    assert_rejected(&[], &[CallP1], &[], &ExecError::IllegalRecursion);
}

#[test]
fn one_way_calls_between_children_are_legal() {
    let mut b = board(&["S..D"], Direction::East);
    let [r, a, c] = procedures(&[CallP1, Exit], &[Forward, CallP2], &[Forward]);
    assert!(verify(&r, &a, &c));
    let log = execute(&mut b, &r, &a, &c).unwrap();
    assert!(log.successful());
}

#[test]
fn missing_exit_is_rejected() {
    assert_rejected(
        &[Forward, Forward],
        &[],
        &[],
        &ExecError::ExitCount { found: 0 },
    );
}

#[test]
fn exits_are_counted_across_children() {
    assert_rejected(
        &[CallP1, Exit],
        &[Exit],
        &[],
        &ExecError::ExitCount { found: 2 },
    );
}

#[test]
fn a_single_exit_inside_a_child_is_enough() {
    let mut b = board(&["S..D"], Direction::East);
    let [r, a, c] = procedures(&[Forward, CallP1], &[Forward, Exit], &[]);
    assert!(verify(&r, &a, &c));
    let log = execute(&mut b, &r, &a, &c).unwrap();
    assert!(log.successful());
}
