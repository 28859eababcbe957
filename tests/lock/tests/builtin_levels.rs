//! Built-in levels: decode, diagnose, solve and win through a session.

use tilebot_harness::contract::RecordingObserver;
use tilebot_harness::levels;
use tilebot_harness::session::GameSession;
use tilebot_kernel::board::reach::ProblemKind;
use tilebot_kernel::exec::ActionKind;
use tilebot_kernel::level::{decode_level, encode_level};
use tilebot_search::{analyze, SolverPolicyV1};

#[test]
fn every_builtin_is_won_by_its_reference_solution() {
    for (name, level) in levels::all().unwrap() {
        let mut session = GameSession::new(level, RecordingObserver::new());
        let log = session
            .play_solution(&SolverPolicyV1::default())
            .unwrap_or_else(|| panic!("{name}: {:?}", session.observer().faults));

        assert!(log.successful(), "{name}: {:?}", log.kinds());
        assert_eq!(log.as_slice()[0].kind(), ActionKind::Start, "{name}");
        assert!(session.observer().faults.is_empty(), "{name}");
    }
}

#[test]
fn builtin_diagnostics_report_no_structural_problems() {
    for (name, level) in levels::all().unwrap() {
        let problems = analyze(&level.board());
        assert!(
            problems
                .iter()
                .all(|p| p.kind == ProblemKind::SolutionTooBig),
            "{name}: {problems:?}"
        );
    }
}

#[test]
fn builtins_survive_a_codec_round_trip() {
    for (name, level) in levels::all().unwrap() {
        let bytes = encode_level(&level).unwrap();
        let again = decode_level(&bytes).unwrap();
        assert_eq!(again, level, "{name}");
        assert_eq!(encode_level(&again).unwrap(), bytes, "{name}");
    }
}

#[test]
fn level_zero_needs_the_coin_behind_the_start() {
    let level = levels::load("level0").unwrap().unwrap();
    let mut session = GameSession::new(level, RecordingObserver::new());
    let log = session.play_solution(&SolverPolicyV1::default()).unwrap();
    let kinds = log.kinds();
    let coin = kinds
        .iter()
        .position(|k| *k == ActionKind::CollectCoin)
        .unwrap();
    let jump = kinds.iter().position(|k| *k == ActionKind::Jump).unwrap();
    assert!(coin < jump);
}
