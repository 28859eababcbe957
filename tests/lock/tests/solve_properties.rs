//! Properties of the solver pipeline over a corpus of solvable boards.
//!
//! 1. `solve` yields three procedures with exactly one `Exit` that win when
//!    executed.
//! 2. Executing the optimized procedures is equivalent, ignoring call
//!    markers, to executing the raw planner output.
//! 3. `analyze` is idempotent and does not modify the board.
//! 4. A board without diagnosed problems is won by its solution, under any
//!    valid policy.

use lock_tests::boards::{board, root_only, solvable_corpus};
use tilebot_kernel::board::Direction;
use tilebot_kernel::exec::{execute, ActionKind};
use tilebot_kernel::program::{exit_count, verify, Instruction, ProcedureId};
use tilebot_search::planner::plan;
use tilebot_search::diagnostics::analyze_with_policy;
use tilebot_search::{analyze, optimize, solve, solve_with_policy, SolverPolicyV1};

#[test]
fn every_solution_wins() {
    for (name, board) in solvable_corpus() {
        assert!(analyze(&board).is_empty(), "{name}: {:?}", analyze(&board));
        let solution = solve(&board).unwrap_or_else(|e| panic!("{name}: {e}"));

        assert_eq!(solution.root.id(), ProcedureId::Root, "{name}");
        assert_eq!(solution.p1.id(), ProcedureId::P1, "{name}");
        assert_eq!(solution.p2.id(), ProcedureId::P2, "{name}");
        assert_eq!(
            exit_count(&solution.root, &solution.p1, &solution.p2),
            1,
            "{name}"
        );
        assert!(verify(&solution.root, &solution.p1, &solution.p2), "{name}");

        let mut live = board.clone();
        let log = execute(&mut live, &solution.root, &solution.p1, &solution.p2).unwrap();
        assert!(log.successful(), "{name}: {:?}", log.kinds());
        assert_eq!(
            log.last().map(|a| a.kind()),
            Some(ActionKind::ExitSuccessful),
            "{name}"
        );
    }
}

#[test]
fn optimized_procedures_replay_the_raw_route() {
    let capacity_sets: [&[usize]; 4] = [&[12, 8, 8], &[12, 3], &[30, 2, 2], &[5]];
    for (name, board) in solvable_corpus() {
        let raw = plan(&board).unwrap();
        let [root, p1, p2] = root_only(&raw);
        let mut direct_board = board.clone();
        let direct = execute(&mut direct_board, &root, &p1, &p2).unwrap();
        assert!(direct.successful(), "{name}: raw route must win");

        for capacities in capacity_sets {
            let optimized = optimize(&raw, capacities).unwrap();
            let empty = tilebot_kernel::program::Procedure::empty;
            let pick = |slot: usize, id: ProcedureId| {
                optimized
                    .procedures
                    .get(slot)
                    .cloned()
                    .unwrap_or_else(|| empty(id))
            };
            let (r, a, c) = (
                pick(0, ProcedureId::Root),
                pick(1, ProcedureId::P1),
                pick(2, ProcedureId::P2),
            );

            let mut folded_board = board.clone();
            let folded = execute(&mut folded_board, &r, &a, &c).unwrap();
            assert_eq!(
                folded.without_markers().effects(),
                direct.without_markers().effects(),
                "{name} with {capacities:?}"
            );
            assert_eq!(folded_board, direct_board, "{name} with {capacities:?}");
        }
    }
}

#[test]
fn staircase_is_folded_into_children() {
    let (_, board) = solvable_corpus()
        .into_iter()
        .find(|(name, _)| *name == "staircase")
        .unwrap();
    let solution = solve(&board).unwrap();
    assert!(solution.root.len() < solution.raw.len());
    assert!(!solution.p1.is_empty());
    assert!(solution.root.contains(Instruction::CallP1) || solution.p2.contains(Instruction::CallP1));
}

#[test]
fn solution_respects_a_tighter_policy_or_warns() {
    let policy = SolverPolicyV1 {
        capacities: vec![4, 2, 2],
    };
    for (name, board) in solvable_corpus() {
        let solution = solve_with_policy(&board, &policy).unwrap();
        assert!(solution.p1.len() <= 2, "{name}");
        assert!(solution.p2.len() <= 2, "{name}");
        assert_eq!(
            solution.fits(&policy),
            solution.warnings.is_empty(),
            "{name}"
        );
    }
}

#[test]
fn no_problems_means_the_solution_wins() {
    let policies: [&[usize]; 5] = [&[12, 8, 8], &[1, 8, 8], &[2, 1, 1], &[3], &[4, 2, 2]];
    let mut boards = solvable_corpus();
    boards.push(("short", board(&["S.D"], Direction::East)));
    boards.push(("door_jumped_onto", board(&["S_Dc"], Direction::East)));

    for (name, board) in boards {
        for capacities in policies {
            let policy = SolverPolicyV1 {
                capacities: capacities.to_vec(),
            };
            if !analyze_with_policy(&board, &policy).is_empty() {
                continue;
            }
            let solution = solve_with_policy(&board, &policy).unwrap();
            let mut live = board.clone();
            let log = execute(&mut live, &solution.root, &solution.p1, &solution.p2).unwrap();
            assert!(
                log.successful(),
                "{name} with {capacities:?}: {:?}",
                log.kinds()
            );
        }
    }
}

#[test]
fn short_solution_over_a_tiny_root_is_diagnosed() {
    let policy = SolverPolicyV1 {
        capacities: vec![1, 8, 8],
    };
    let problems = analyze_with_policy(&board(&["S.D"], Direction::East), &policy);
    assert_eq!(problems.len(), 1);
    assert_eq!(
        problems[0].kind,
        tilebot_kernel::board::reach::ProblemKind::SolutionTooBig
    );
}

#[test]
fn analyze_is_idempotent_and_read_only() {
    let mut boards = solvable_corpus();
    boards.push(("no_door", board(&["S..c"], Direction::East)));
    boards.push(("walled_coin", board(&["S.D#c"], Direction::East)));
    boards.push(("two_starts", board(&["S.DS"], Direction::East)));

    for (name, board) in boards {
        let before = board.clone();
        let first = analyze(&board);
        let second = analyze(&board);
        assert_eq!(first, second, "{name}");
        assert_eq!(board, before, "{name}");
    }
}

#[test]
fn solving_twice_gives_the_same_solution() {
    for (name, board) in solvable_corpus() {
        assert_eq!(solve(&board).unwrap(), solve(&board).unwrap(), "{name}");
    }
}
