//! Tests for status snapshots

use kernel_sim::core::{InstantExecutor, ProcessState, Scheduler};

#[test]
fn test_snapshot_counts() {
    let mut scheduler = Scheduler::new(100, InstantExecutor).unwrap();
    scheduler.launch("a", 30).unwrap();
    scheduler.launch("b", 20).unwrap();

    let snapshot = scheduler.snapshot();
    assert_eq!(snapshot.used, 50);
    assert_eq!(snapshot.capacity, 100);
    assert_eq!(snapshot.available(), 50);
    assert_eq!(snapshot.ready_count(), 2);
    assert_eq!(snapshot.terminated_count(), 0);

    scheduler.run_all().unwrap();
    let snapshot = scheduler.snapshot();
    assert_eq!(snapshot.ready_count(), 0);
    assert_eq!(snapshot.terminated_count(), 2);
}

#[test]
fn test_reporter_matches_snapshot() {
    let mut scheduler = Scheduler::new(100, InstantExecutor).unwrap();
    scheduler.launch("a", 30).unwrap();
    assert_eq!(scheduler.reporter().snapshot(), scheduler.snapshot());
}

#[test]
fn test_snapshot_display() {
    let mut scheduler = Scheduler::new(512, InstantExecutor).unwrap();
    scheduler.launch("AI_Triage_Model", 120).unwrap();
    scheduler.launch("Logger", 64).unwrap();

    let report = scheduler.snapshot().to_string();
    assert_eq!(
        report,
        "PID 1 | AI_Triage_Model | State: READY\n\
         PID 2 | Logger | State: READY\n\
         Memory: 184/512MB used"
    );
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut scheduler = Scheduler::new(64, InstantExecutor).unwrap();
    scheduler.launch("a", 8).unwrap();
    scheduler.run_all().unwrap();

    let json = serde_json::to_value(scheduler.snapshot()).unwrap();
    assert_eq!(json["used"], 0);
    assert_eq!(json["capacity"], 64);
    assert_eq!(json["processes"][0]["state"], "terminated");
    assert_eq!(json["processes"][0]["memory_reserved"], 8);
}

#[test]
fn test_state_display() {
    assert_eq!(ProcessState::Ready.to_string(), "READY");
    assert_eq!(ProcessState::Terminated.to_string(), "TERMINATED");
}
