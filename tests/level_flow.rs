//! Integration tests: load level pairs from disk and replay input tapes
//! against the full pipeline, including the shipped levels.

use std::fs;
use std::path::Path;

use twinfall::level::{LevelError, load_level};
use twinfall::sim::{TickInput, tick};
use twinfall::{Records, Tuning};

/// The same tape the demo binary replays
fn demo_tape(tick_no: u32) -> TickInput {
    TickInput {
        move_left: false,
        move_right: true,
        jump: tick_no % 60 < 3,
    }
}

const HOLD_RIGHT: TickInput = TickInput {
    move_left: false,
    move_right: true,
    jump: false,
};

fn write_pair(dir: &Path, number: u32, main_text: &str, alt_text: &str) {
    fs::write(dir.join(format!("level{number}.txt")), main_text).unwrap();
    fs::write(dir.join(format!("level{number}a.txt")), alt_text).unwrap();
}

#[test]
fn test_straight_corridor_completes_and_records() {
    let tmp = tempfile::tempdir().unwrap();
    // Both layouts are a flat walk to the exit
    let corridor = "#####\n\n    @\n0, 0";
    write_pair(tmp.path(), 7, corridor, corridor);

    let tuning = Tuning::default();
    let mut level = load_level(tmp.path(), 7, &tuning).unwrap();

    let mut completed_at = None;
    for tick_no in 0..200 {
        let report = tick(&mut level, &HOLD_RIGHT);
        assert!(!report.restarted, "nothing lethal in this corridor");
        if report.completed {
            completed_at = Some(tick_no);
            break;
        }
    }
    // Walking right at 4 units per tick, the avatar center crosses into
    // the exit window on the 47th tick
    assert_eq!(completed_at, Some(46));
    assert_eq!(level.deaths, 0);

    let records = Records::new(tmp.path().join("records"));
    assert_eq!(records.submit(7, level.deaths).unwrap(), Some(1));
    assert_eq!(records.best(7).unwrap(), Some(1));
    // A slower rerun leaves the record alone
    assert_eq!(records.submit(7, 5).unwrap(), None);
    assert_eq!(records.best(7).unwrap(), Some(1));
}

#[test]
fn test_hazard_restarts_both_layouts() {
    let tmp = tempfile::tempdir().unwrap();
    // The main layout has a spike across the only path; the alternate is
    // clear but never gets far enough before the shared restart
    write_pair(
        tmp.path(),
        1,
        "#####\n\n  ^ @\n0, 0",
        "#####\n\n    @\n0, 0",
    );

    let tuning = Tuning::default();
    let mut level = load_level(tmp.path(), 1, &tuning).unwrap();

    let mut first_restart = None;
    for tick_no in 0..40 {
        let report = tick(&mut level, &HOLD_RIGHT);
        if report.restarted && first_restart.is_none() {
            first_restart = Some(tick_no);
        }
        assert!(!report.completed);
    }

    assert_eq!(first_restart, Some(12));
    // One death every 13 ticks of walking
    assert_eq!(level.deaths, 3);
    assert!(!level.main.beaten);
    assert!(!level.alt.beaten);
}

#[test]
fn test_loaded_levels_replay_deterministically() {
    let tmp = tempfile::tempdir().unwrap();
    write_pair(
        tmp.path(),
        2,
        "########\n  ^\n  #    @\n0, 0",
        "########\n\n     ^ @\n0, 0",
    );

    let tuning = Tuning::default();
    let mut a = load_level(tmp.path(), 2, &tuning).unwrap();
    let mut b = load_level(tmp.path(), 2, &tuning).unwrap();

    for tick_no in 0..300 {
        tick(&mut a, &demo_tape(tick_no));
        tick(&mut b, &demo_tape(tick_no));
        if tick_no % 50 == 0 {
            let snap_a = serde_json::to_string(&a).unwrap();
            let snap_b = serde_json::to_string(&b).unwrap();
            assert_eq!(snap_a, snap_b, "divergence at tick {tick_no}");
        }
    }
    assert_eq!(a.deaths, b.deaths);
}

#[test]
fn test_missing_alt_file_reports_its_path() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("level3.txt"), "#@\n0, 0").unwrap();

    let tuning = Tuning::default();
    let err = load_level(tmp.path(), 3, &tuning).unwrap_err();
    match err {
        LevelError::Io { path, .. } => {
            assert!(path.ends_with("level3a.txt"), "unexpected path {path:?}");
        }
        other => panic!("expected an Io error, got {other}"),
    }
}

fn shipped_levels() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("levels")
}

#[test]
fn test_shipped_level1_completes_under_demo_tape() {
    let tuning = Tuning::default();
    let mut level = load_level(&shipped_levels(), 1, &tuning).unwrap();

    let mut completed_at = None;
    for tick_no in 0..2000 {
        let report = tick(&mut level, &demo_tape(tick_no));
        if report.completed {
            completed_at = Some(tick_no);
            break;
        }
    }
    // Both corridors are clear runs; the later (main) avatar needs
    // (1012.5 - 79) / 4 ticks to reach the exit window
    assert_eq!(completed_at, Some(234));
    assert_eq!(level.deaths, 0);
}

#[test]
fn test_shipped_level2_completes_under_demo_tape() {
    let tuning = Tuning::default();
    let mut level = load_level(&shipped_levels(), 2, &tuning).unwrap();

    let mut completed_at = None;
    for tick_no in 0..2000 {
        let report = tick(&mut level, &demo_tape(tick_no));
        assert!(!report.restarted, "the elevated spikes are out of reach");
        if report.completed {
            completed_at = Some(tick_no);
            break;
        }
    }
    assert!(completed_at.is_some(), "tape never finished level 2");
    assert_eq!(level.deaths, 0);
}
