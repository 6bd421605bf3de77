use super::*;
use std::collections::HashSet;
use std::thread;

use beacon_types::SCHEMA_SCREEN_ENTITY;
use serde_json::Value;
use uuid::Uuid;

fn keys(payload: &beacon_payload::Payload) -> Vec<&str> {
    payload.as_map().keys().map(String::as_str).collect()
}

// ── screen state validity ────────────────────────────────────────────────────

#[test]
fn named_state_is_valid_and_gets_a_screen_id() {
    let state = ScreenState::new("Home", Some("main"), None);
    assert!(state.is_valid());
    assert!(!state.screen_id().is_empty());
    assert!(Uuid::parse_str(state.screen_id()).is_ok());
    assert_eq!(state.transition_type(), None);
}

#[test]
fn empty_name_makes_the_state_invalid() {
    let state = ScreenState::new("", Some("main"), Some("x"));
    assert!(!state.is_valid());
    assert_eq!(state.screen_id(), "x");
}

#[test]
fn supplied_screen_id_is_kept_verbatim() {
    let state = ScreenState::with_transition("Cart", None, Some("s-17"), Some("push"));
    assert_eq!(state.screen_id(), "s-17");
    assert_eq!(state.transition_type(), Some("push"));
}

#[test]
fn generated_screen_ids_do_not_collide() {
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let state = ScreenState::new("Home", None, None);
        assert!(seen.insert(state.screen_id().to_owned()));
    }
    assert_eq!(seen.len(), 10_000);
}

// ── presence export ──────────────────────────────────────────────────────────

#[test]
fn valid_dictionary_holds_exactly_the_present_fields() {
    let state = ScreenState::new("Home", None, Some("abc"));
    let fields = state.valid_dictionary();
    assert_eq!(keys(&fields), ["name", "id"]);
    assert_eq!(fields.get("name"), Some(&Value::String("Home".into())));
    assert_eq!(fields.get("id"), Some(&Value::String("abc".into())));
}

#[test]
fn valid_dictionary_with_every_field_present() {
    let state = ScreenState::with_transition("Cart", Some("modal"), Some("s-1"), Some("present"));
    let fields = state.valid_dictionary();
    assert_eq!(keys(&fields), ["name", "id", "type", "transitionType"]);
}

#[test]
fn valid_dictionary_omits_an_empty_name_but_reports_the_rest() {
    let state = ScreenState::new("", Some("main"), Some("x"));
    let fields = state.valid_dictionary();
    assert_eq!(keys(&fields), ["id", "type"]);
}

#[test]
fn screen_context_is_gated_on_validity() {
    assert!(ScreenState::new("", None, None).screen_context().is_none());

    let context = ScreenState::new("Home", Some("main"), Some("abc"))
        .screen_context()
        .unwrap();
    assert_eq!(context.schema(), SCHEMA_SCREEN_ENTITY);
    assert_eq!(context.data()["name"], "Home");
    assert_eq!(context.data()["id"], "abc");
}

// ── tracker transitions ──────────────────────────────────────────────────────

#[test]
fn first_transition_has_no_previous_state() {
    let tracker = ScreenStateTracker::new();
    assert!(tracker.current().is_none());
    assert!(tracker.previous().is_none());

    let step = tracker.transition(ScreenState::new("Home", Some("main"), None));
    assert!(step.previous.is_none());
    assert_eq!(step.current.name(), "Home");
    assert_eq!(tracker.current().unwrap().name(), "Home");
    assert!(tracker.previous().is_none());
}

#[test]
fn demoted_state_keeps_its_identity_but_drops_the_transition() {
    let tracker = ScreenStateTracker::new();
    let first = tracker.transition(ScreenState::with_transition(
        "Home",
        Some("main"),
        None,
        Some("push"),
    ));
    let home_id = first.current.screen_id().to_owned();

    let step = tracker.transition(ScreenState::with_transition(
        "Cart",
        Some("modal"),
        None,
        Some("present"),
    ));
    let previous = step.previous.unwrap();
    assert_eq!(previous.name(), "Home");
    assert_eq!(previous.screen_id(), home_id);
    assert_eq!(previous.screen_type(), Some("main"));
    assert_eq!(previous.transition_type(), None);

    assert_eq!(tracker.previous().unwrap().screen_id(), home_id);
    assert_eq!(tracker.current().unwrap().name(), "Cart");
}

#[test]
fn reader_snapshots_survive_later_transitions() {
    let tracker = ScreenStateTracker::new();
    tracker.transition(ScreenState::new("Home", None, None));
    let snapshot = tracker.current().unwrap();

    tracker.transition(ScreenState::new("Cart", None, None));
    assert_eq!(snapshot.name(), "Home");
    assert_eq!(tracker.current().unwrap().name(), "Cart");
}

#[test]
fn tracker_screen_context_follows_the_current_state() {
    let tracker = ScreenStateTracker::new();
    assert!(tracker.screen_context().is_none());

    tracker.transition(ScreenState::new("Home", None, None));
    assert_eq!(
        tracker.screen_context().unwrap().schema(),
        SCHEMA_SCREEN_ENTITY
    );

    tracker.transition(ScreenState::new("", None, None));
    assert!(tracker.screen_context().is_none());
}

#[test]
fn concurrent_transitions_always_publish_whole_states() {
    let tracker = ScreenStateTracker::new();
    let mut handles = Vec::new();
    for worker in 0..8 {
        let tracker = tracker.clone();
        handles.push(thread::spawn(move || {
            for step in 0..50 {
                let name = format!("Screen-{worker}-{step}");
                let installed = tracker.transition(ScreenState::with_transition(
                    name.clone(),
                    None,
                    None,
                    Some("push"),
                ));
                assert_eq!(installed.current.name(), name);

                let seen = tracker.current().expect("a current state exists");
                assert!(seen.is_valid());
                assert!(Uuid::parse_str(seen.screen_id()).is_ok());
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // Every installed state carried a transition, so any previous
    // snapshot must have had its transition dropped.
    assert!(tracker.current().is_some());
    let previous = tracker.previous().unwrap();
    assert_eq!(previous.transition_type(), None);
    assert!(previous.name().starts_with("Screen-"));
}
