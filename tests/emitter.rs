use std::sync::{Arc, Mutex};

use droplist::emitter::{Callback, EventEmitter};

type Log = Arc<Mutex<Vec<String>>>;

fn recorder(log: &Log, tag: &str) -> Callback<String> {
    let log = Arc::clone(log);
    let tag = tag.to_string();
    Arc::new(move |payload: &String| {
        log.lock().unwrap().push(format!("{tag}:{payload}"));
    })
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

// ============================================================================
// Registration and ordering
// ============================================================================

#[test]
fn test_emit_fires_in_registration_order() {
    let hub = EventEmitter::new();
    let log = Log::default();
    hub.on("evt", recorder(&log, "first"))
        .on("evt", recorder(&log, "second"))
        .on("evt", recorder(&log, "third"));

    hub.emit("evt", &"x".to_string());
    assert_eq!(entries(&log), vec!["first:x", "second:x", "third:x"]);
}

#[test]
fn test_same_callback_registered_twice_fires_twice() {
    let hub = EventEmitter::new();
    let log = Log::default();
    let callback = recorder(&log, "cb");
    hub.on("evt", callback.clone()).on("evt", callback.clone());

    hub.emit("evt", &"x".to_string());
    assert_eq!(entries(&log), vec!["cb:x", "cb:x"]);
    assert_eq!(hub.listener_count("evt"), 2);
}

#[test]
fn test_listeners_are_per_name() {
    let hub = EventEmitter::new();
    let log = Log::default();
    hub.on("one", recorder(&log, "a"));
    hub.on("two", recorder(&log, "b"));

    hub.emit("one", &"x".to_string());
    assert_eq!(entries(&log), vec!["a:x"]);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_off_removes_first_matching_record_only() {
    let hub = EventEmitter::new();
    let log = Log::default();
    let callback = recorder(&log, "cb");
    hub.on("evt", callback.clone())
        .on("evt", callback.clone())
        .on("evt", recorder(&log, "other"));

    hub.off("evt", &callback);
    assert_eq!(hub.listener_count("evt"), 2);

    hub.emit("evt", &"x".to_string());
    assert_eq!(entries(&log), vec!["cb:x", "other:x"]);
}

#[test]
fn test_off_unknown_name_is_noop() {
    let hub = EventEmitter::new();
    let log = Log::default();
    let callback = recorder(&log, "cb");
    hub.on("evt", callback.clone());

    hub.off("missing", &callback);
    assert_eq!(hub.listener_count("evt"), 1);
}

#[test]
fn test_off_unknown_callback_is_noop() {
    let hub = EventEmitter::new();
    let log = Log::default();
    hub.on("evt", recorder(&log, "kept"));

    let never_registered = recorder(&log, "stranger");
    hub.off("evt", &never_registered);

    hub.emit("evt", &"x".to_string());
    assert_eq!(entries(&log), vec!["kept:x"]);
}

#[test]
fn test_identity_is_per_registration_not_per_closure_body() {
    let hub = EventEmitter::new();
    let log = Log::default();
    // Two allocations with identical bodies are distinct subscribers.
    let a = recorder(&log, "same");
    let b = recorder(&log, "same");
    hub.on("evt", a.clone()).on("evt", b);

    hub.off("evt", &a);
    hub.emit("evt", &"x".to_string());
    assert_eq!(entries(&log), vec!["same:x"]);
}

// ============================================================================
// Emission
// ============================================================================

#[test]
fn test_emit_with_no_subscribers_is_noop() {
    let hub: EventEmitter<String> = EventEmitter::new();
    // Chainable and silent.
    hub.emit("missing", &"x".to_string())
        .emit("missing", &"y".to_string());
    assert_eq!(hub.listener_count("missing"), 0);
}

#[test]
fn test_reentrant_off_does_not_skip_subscribers() {
    let hub = Arc::new(EventEmitter::<String>::new());
    let log = Log::default();

    let victim = recorder(&log, "victim");

    // First subscriber deregisters the second one mid-emission.
    let saboteur: Callback<String> = {
        let log = Arc::clone(&log);
        let hub = Arc::clone(&hub);
        let victim = victim.clone();
        Arc::new(move |payload: &String| {
            log.lock().unwrap().push(format!("saboteur:{payload}"));
            hub.off("evt", &victim);
        })
    };

    hub.on("evt", saboteur).on("evt", victim);

    // Everyone present at emission start still fires exactly once.
    hub.emit("evt", &"x".to_string());
    assert_eq!(entries(&log), vec!["saboteur:x", "victim:x"]);

    // The removal did take effect for subsequent emissions.
    hub.emit("evt", &"y".to_string());
    assert_eq!(entries(&log), vec!["saboteur:x", "victim:x", "saboteur:y"]);
}

#[test]
fn test_reentrant_on_does_not_fire_during_current_emission() {
    let hub = Arc::new(EventEmitter::<String>::new());
    let log = Log::default();

    let adder: Callback<String> = {
        let log = Arc::clone(&log);
        let hub = Arc::clone(&hub);
        Arc::new(move |payload: &String| {
            log.lock().unwrap().push(format!("adder:{payload}"));
            hub.on("evt", recorder(&log, "late"));
        })
    };

    hub.on("evt", adder);
    hub.emit("evt", &"x".to_string());
    assert_eq!(entries(&log), vec!["adder:x"]);

    hub.emit("evt", &"y".to_string());
    assert_eq!(entries(&log), vec!["adder:x", "adder:y", "late:y"]);
}
