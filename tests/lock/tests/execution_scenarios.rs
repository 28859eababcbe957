//! Execution scenarios on small hand-built boards.
//!
//! Each test runs the interpreter directly (no session, no `Start` action)
//! and pins the exact action log.

use lock_tests::boards::{board, procedures, root_only};
use tilebot_kernel::board::{Direction, Position};
use tilebot_kernel::exec::{execute, ActionKind, Bot};
use tilebot_kernel::program::{Instruction, ProcedureId};

use ActionKind as K;
use Instruction::{CallP1, CallP2, Exit, Forward, Jump, TurnLeft, TurnRight};

#[test]
fn walking_into_a_wall_ends_the_run() {
    let mut b = board(&["S.#"], Direction::East);
    let [root, p1, p2] = root_only(&[Forward, Forward, Forward, Exit]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();

    assert_eq!(log.kinds(), vec![K::Move, K::Move, K::RunIntoWall]);
    let first = log.as_slice()[0];
    assert_eq!(first.position(), Some(Position::new(0, 0)));
    assert_eq!(first.destination(), Some(Position::new(1, 0)));
    let second = log.as_slice()[1];
    assert_eq!(second.position(), Some(Position::new(1, 0)));
    assert_eq!(second.destination(), Some(Position::new(2, 0)));
    assert!(log.failed());
    assert!(!log.successful());
    assert_eq!(b.bot_position(), Position::new(1, 0));
}

#[test]
fn exit_next_to_the_door_wins() {
    let mut b = board(&["SD"], Direction::East);
    let [root, p1, p2] = root_only(&[Exit]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();

    assert_eq!(log.kinds(), vec![K::ExitSuccessful]);
    assert!(log.successful());
}

#[test]
fn coin_is_collected_after_the_move() {
    let mut b = board(&["ScD"], Direction::East);
    let [root, p1, p2] = root_only(&[Forward, Exit]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();

    assert_eq!(
        log.kinds(),
        vec![K::Move, K::CollectCoin, K::ExitSuccessful]
    );
    assert!(log.successful());
    assert!(!b.has_coins());
}

#[test]
fn exit_with_coins_left_fails() {
    let mut b = board(&["cSD"], Direction::East);
    let [root, p1, p2] = root_only(&[Exit]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();
    assert_eq!(log.kinds(), vec![K::ExitFailed]);
}

#[test]
fn jump_over_an_abyss_onto_normal_floor() {
    let rows = [".##", "_##", "S_."];

    let mut b = board(&rows, Direction::East);
    let actions = Bot::new(&mut b).jump();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].kind(), K::Jump);
    assert!(!actions[0].is_failure());
    assert_eq!(b.bot_position(), Position::new(2, 2));

    let mut b = board(&rows, Direction::East);
    let [root, p1, p2] = root_only(&[Jump, Exit]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();
    assert_eq!(log.kinds(), vec![K::Jump, K::ExitFailed]);
    assert_eq!(log.as_slice()[0].destination(), Some(Position::new(2, 2)));
}

#[test]
fn jump_north_over_an_abyss_as_well() {
    let mut b = board(&[".##", "_##", "S_."], Direction::North);
    let actions = Bot::new(&mut b).jump();
    assert_eq!(actions[0].kind(), K::Jump);
    assert_eq!(b.bot_position(), Position::new(0, 0));
}

#[test]
fn forward_into_an_abyss_falls() {
    let mut b = board(&["S_.D"], Direction::East);
    let [root, p1, p2] = root_only(&[Forward, Exit]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();
    assert_eq!(log.kinds(), vec![K::Move, K::FallIntoAbyss]);
    assert_eq!(log.as_slice()[1].position(), Some(Position::new(1, 0)));
}

#[test]
fn jump_over_floor_runs_into_a_wall() {
    let mut b = board(&["S..D"], Direction::East);
    let [root, p1, p2] = root_only(&[Jump, Exit]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();
    assert_eq!(log.kinds(), vec![K::RunIntoWall]);
    assert_eq!(b.bot_position(), Position::new(0, 0));
}

#[test]
fn turns_never_fail() {
    let mut b = board(&["S"], Direction::North);
    let [root, p1, p2] = root_only(&[TurnLeft, TurnLeft, TurnRight, TurnLeft, TurnLeft, Exit]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();
    assert_eq!(
        log.kinds(),
        vec![
            K::TurnLeft,
            K::TurnLeft,
            K::TurnRight,
            K::TurnLeft,
            K::TurnLeft,
            K::ExitFailed
        ]
    );
    assert_eq!(b.bot_facing(), Direction::East);
}

#[test]
fn calls_are_bracketed_and_tagged() {
    let mut b = board(&["S....D"], Direction::East);
    let [root, p1, p2] = procedures(&[CallP1, Exit], &[Forward, CallP2], &[Forward, Forward]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();

    assert_eq!(
        log.kinds(),
        vec![
            K::StartExecuteP1,
            K::Move,
            K::StartExecuteP2,
            K::Move,
            K::Move,
            K::StopExecuteP2,
            K::StopExecuteP1,
            K::ExitFailed,
        ]
    );
    let tags: Vec<_> = log
        .iter()
        .map(|a| (a.procedure(), a.instruction()))
        .collect();
    assert_eq!(
        tags,
        vec![
            (Some(ProcedureId::Root), Some(0)),
            (Some(ProcedureId::P1), Some(0)),
            (Some(ProcedureId::P1), Some(1)),
            (Some(ProcedureId::P2), Some(0)),
            (Some(ProcedureId::P2), Some(1)),
            (Some(ProcedureId::P1), Some(1)),
            (Some(ProcedureId::Root), Some(0)),
            (Some(ProcedureId::Root), Some(1)),
        ]
    );
}

#[test]
fn failure_inside_a_call_still_closes_the_brackets() {
    let mut b = board(&["S.#D"], Direction::East);
    let [root, p1, p2] = procedures(&[CallP1, Exit], &[CallP2], &[Forward, Forward, Forward]);
    let log = execute(&mut b, &root, &p1, &p2).unwrap();

    assert_eq!(
        log.kinds(),
        vec![
            K::StartExecuteP1,
            K::StartExecuteP2,
            K::Move,
            K::Move,
            K::RunIntoWall,
            K::StopExecuteP2,
            K::StopExecuteP1,
        ]
    );
}
