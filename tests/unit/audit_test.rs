//! Tests for audit sink

use kernel_sim::core::{build_audit_event, AuditAction, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    sink.record(build_audit_event(Some(1), "Logger", AuditAction::Launch, 64, 64));
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].process_id, Some(1));
    assert_eq!(events[0].name, "Logger");
    assert_eq!(events[0].action, AuditAction::Launch);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(Some(1), "a", AuditAction::Launch, 1, 1));
    sink.record(build_audit_event(Some(2), "b", AuditAction::Launch, 1, 2));
    sink.record(build_audit_event(Some(3), "c", AuditAction::Launch, 1, 3));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].process_id, Some(2)); // First one popped
    assert_eq!(events[1].process_id, Some(3));
}

#[test]
fn test_clones_share_buffer() {
    let sink = InMemoryAuditSink::new(10);
    let mut writer = sink.clone();

    writer.record(build_audit_event(None, "big", AuditAction::Reject, 999, 0));
    assert_eq!(sink.events_for(AuditAction::Reject).len(), 1);
    assert!(sink.events_for(AuditAction::Launch).is_empty());
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(Some(4), "worker", AuditAction::Terminate, 32, 0);

    assert_eq!(event.process_id, Some(4));
    assert_eq!(event.name, "worker");
    assert_eq!(event.action, AuditAction::Terminate);
    assert_eq!(event.memory_mb, 32);
    assert_eq!(event.used_after, 0);
    assert_eq!(event.event_id.len(), 36);
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_audit_action_display() {
    assert_eq!(AuditAction::Launch.to_string(), "launch");
    assert_eq!(AuditAction::Reject.to_string(), "reject");
    assert_eq!(AuditAction::Execute.to_string(), "execute");
    assert_eq!(AuditAction::Terminate.to_string(), "terminate");
}

#[test]
fn test_audit_event_display() {
    let launched = build_audit_event(Some(3), "Logger", AuditAction::Launch, 64, 384);
    assert_eq!(launched.to_string(), "[launch] pid 3 Logger | 64MB, used 384MB");

    let rejected = build_audit_event(None, "BackupProcess", AuditAction::Reject, 180, 384);
    assert_eq!(rejected.to_string(), "[reject] BackupProcess | 180MB, used 384MB");
}
