use std::fs;
use std::time::Duration;

use solve_timer::{
    app::{App, Command},
    clock::ManualClock,
    config::Config,
    history::{FileHistoryStore, HistoryStore},
    penalty::Penalty,
    solve::SolveRecord,
};
use tempfile::tempdir;

fn solve(app: &mut App<ManualClock>, clock: &ManualClock, inspect: f64, solve_secs: f64) {
    app.handle(Command::Advance);
    clock.advance_secs_f64(inspect);
    app.handle(Command::Advance);
    clock.advance_secs_f64(solve_secs);
    app.handle(Command::Advance);
}

#[test]
fn solves_survive_a_restart_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("solves.json");

    let clock = ManualClock::new();
    let mut app = App::new(
        &Config::default(),
        Box::new(FileHistoryStore::with_path(&path)),
        clock.clone(),
    );
    solve(&mut app, &clock, 5.0, 10.0);
    solve(&mut app, &clock, 16.0, 11.0);
    solve(&mut app, &clock, 8.0, 12.0);
    app.handle(Command::Quit);
    let first_session = app.history().records().to_vec();
    drop(app);

    let reopened = App::new(
        &Config::default(),
        Box::new(FileHistoryStore::with_path(&path)),
        ManualClock::new(),
    );
    assert_eq!(reopened.history().records(), first_session.as_slice());
    assert_eq!(reopened.history().records()[1].penalty, Penalty::PlusTwo);
    assert!((reopened.history().records()[1].time - 13.0).abs() < 1e-9);
}

#[test]
fn every_finished_solve_is_on_disk_before_quit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("solves.json");
    let clock = ManualClock::new();
    let mut app = App::new(
        &Config::default(),
        Box::new(FileHistoryStore::with_path(&path)),
        clock.clone(),
    );

    solve(&mut app, &clock, 3.0, 9.5);

    // no quit: a killed process keeps what was saved at finalize
    let on_disk = FileHistoryStore::with_path(&path).load();
    assert_eq!(on_disk, vec![SolveRecord::new(9.5, Penalty::None)]);
}

#[test]
fn corrupt_history_starts_empty_and_is_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("solves.json");
    fs::write(&path, b"\x00\x01garbage").unwrap();

    let clock = ManualClock::new();
    let mut app = App::new(
        &Config::default(),
        Box::new(FileHistoryStore::with_path(&path)),
        clock.clone(),
    );
    assert!(app.history().is_empty());

    solve(&mut app, &clock, 1.0, 6.0);
    assert_eq!(FileHistoryStore::with_path(&path).load().len(), 1);
}

#[test]
fn reset_mid_solve_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("solves.json");
    let clock = ManualClock::new();
    let mut app = App::new(
        &Config::default(),
        Box::new(FileHistoryStore::with_path(&path)),
        clock.clone(),
    );

    app.handle(Command::Advance);
    app.handle(Command::Advance);
    clock.advance(Duration::from_secs(4));
    app.handle(Command::Reset);

    assert!(app.history().is_empty());
    assert!(!path.exists());
}
