//! Replay tests - scripted sessions and JSON observations

use blockfall::core::{GameState, ScriptedSource};
use blockfall::protocol::{ObservationMessage, ShapeKindLower, StatusLower};
use blockfall::replay::{apply_step, parse_script, run_script, ReplayStep};
use blockfall::types::GameAction;

fn scripted(pieces: &str) -> GameState<ScriptedSource> {
    GameState::with_source(ScriptedSource::parse(pieces).unwrap())
}

#[test]
fn test_parse_script_with_comments() {
    let steps = parse_script(
        "# opening\n\
         left\n\
         \n\
         rotate   # spin it\n\
         tick 700\n\
         space\n\
         quit\n",
    )
    .unwrap();

    assert_eq!(
        steps,
        vec![
            ReplayStep::Action(GameAction::MoveLeft),
            ReplayStep::Action(GameAction::Rotate),
            ReplayStep::Tick(700),
            ReplayStep::Action(GameAction::HardDrop),
            ReplayStep::Quit,
        ]
    );
}

#[test]
fn test_parse_script_reports_line_number() {
    let err = parse_script("left\ntick soon\n").unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.starts_with("replay: line 2:"), "{}", msg);
}

#[test]
fn test_run_script_counts_locks_and_lines() {
    let mut game = scripted("O");
    let steps = parse_script("hardDrop\nhardDrop\ntick 700\n").unwrap();

    let mut seen = Vec::new();
    let report = run_script(&mut game, &steps, |_, step, lock| {
        seen.push((step, lock.is_some()));
    });

    assert_eq!(report.steps_applied, 3);
    assert_eq!(report.locks, 2);
    assert_eq!(report.lines_cleared, 0);
    assert!(!report.quit);
    assert_eq!(seen.len(), 3);
    assert!(seen[0].1 && seen[1].1 && !seen[2].1);
    assert_eq!(game.score(), 38 + 34);
}

#[test]
fn test_quit_stops_processing() {
    let mut game = scripted("T");
    let steps = parse_script("left\nquit\nhardDrop\n").unwrap();

    let report = run_script(&mut game, &steps, |_, _, _| {});

    assert!(report.quit);
    assert_eq!(report.steps_applied, 2);
    assert_eq!(report.locks, 0);
    assert_eq!(game.active().x, 2);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_apply_step_returns_lock() {
    let mut game = scripted("IO");
    assert!(apply_step(&mut game, ReplayStep::Action(GameAction::MoveRight)).is_none());
    let lock = apply_step(&mut game, ReplayStep::Action(GameAction::HardDrop)).unwrap();
    assert_eq!(lock.drop_distance, 19);
    // Consumed by the step
    assert!(game.take_last_lock().is_none());
}

#[test]
fn test_paused_script_ignores_moves() {
    let mut game = scripted("O");
    let steps = parse_script("p\nleft\ndown\ntick 5000\np\n").unwrap();

    run_script(&mut game, &steps, |_, _, _| {});

    assert_eq!((game.active().x, game.active().y), (3, -1));
    assert_eq!(game.score(), 0);
    assert!(!game.paused());
}

#[test]
fn test_final_observation_json() {
    let mut game = scripted("OT");
    let steps = parse_script("harddrop\n").unwrap();
    let mut last = None;
    run_script(&mut game, &steps, |_, _, lock| last = lock);

    let obs = ObservationMessage::from_snapshot(1, &game.snapshot(), last);
    let line = serde_json::to_string(&obs).unwrap();
    assert!(!line.contains('\n'));

    let parsed: ObservationMessage = serde_json::from_str(&line).unwrap();
    assert_eq!(parsed.status, StatusLower::Active);
    assert_eq!(parsed.score, 38);
    assert_eq!(parsed.active.kind, ShapeKindLower::T);
    assert_eq!(parsed.board.cells[19], vec![0, 0, 0, 0, 4, 4, 0, 0, 0, 0]);
    assert_eq!(parsed.last_lock.unwrap().kind, ShapeKindLower::O);
}
