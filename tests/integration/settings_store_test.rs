//! Integration tests for the settings store
//!
//! Covers validating setters, shallow merges and subscriber bookkeeping.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use studio_site::models::{CardSurface, CursorSettings, SettingsPatch};
use studio_site::SettingsStore;

use crate::helpers::sample_settings;

fn store_with_counter() -> (SettingsStore, Rc<Cell<usize>>) {
    let mut store = SettingsStore::new(sample_settings());
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    store.subscribe(move |_| counter.set(counter.get() + 1));
    (store, calls)
}

#[test]
fn test_invalid_card_style_is_ignored() {
    let (mut store, calls) = store_with_counter();

    assert!(!store.set_card_style(CardSurface::Team, "glow"));
    assert_eq!(store.card_style(CardSurface::Team), "tilt");
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_valid_card_style_notifies_every_subscriber_once() {
    let mut store = SettingsStore::new(sample_settings());
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));

    let f = Rc::clone(&first);
    store.subscribe(move |_| f.set(f.get() + 1));
    let s = Rc::clone(&second);
    store.subscribe(move |_| s.set(s.get() + 1));

    assert!(store.set_card_style(CardSurface::Project, "nft"));
    assert_eq!(store.card_style(CardSurface::Project), "nft");
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

#[test]
fn test_particle_count_999_is_rejected() {
    let (mut store, calls) = store_with_counter();

    assert!(!store.set_particle_count(999));
    assert_eq!(store.get().particles.count, 100);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_subscribers_run_in_registration_order() {
    let mut store = SettingsStore::new(sample_settings());
    let order = Rc::new(RefCell::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        store.subscribe(move |_| order.borrow_mut().push(label));
    }

    assert!(store.set_cursor_color("#123456"));
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn test_unsubscribed_listener_is_silent() {
    let mut store = SettingsStore::new(sample_settings());
    let kept = Rc::new(Cell::new(0));
    let dropped = Rc::new(Cell::new(0));

    let k = Rc::clone(&kept);
    store.subscribe(move |_| k.set(k.get() + 1));
    let d = Rc::clone(&dropped);
    let id = store.subscribe(move |_| d.set(d.get() + 1));

    assert!(store.unsubscribe(id));
    assert!(store.set_particle_count(250));
    assert!(store.set_feature_enabled("parallax", true));

    assert_eq!(kept.get(), 2);
    assert_eq!(dropped.get(), 0);
}

#[test]
fn test_update_replaces_sections_and_notifies() {
    let (mut store, calls) = store_with_counter();

    store.update(SettingsPatch {
        cursor: Some(CursorSettings { color: "#abcdef".to_string() }),
        ..Default::default()
    });

    assert_eq!(store.get().cursor.color, "#abcdef");
    assert_eq!(store.card_style(CardSurface::Team), "tilt");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_missing_feature_paths_are_disabled() {
    let store = SettingsStore::new(sample_settings());

    assert!(!store.is_feature_enabled("doesNotExist"));
    assert!(!store.is_feature_enabled("particles.count"));
    assert!(!store.is_feature_enabled("features"));
    assert!(store.is_feature_enabled("particles"));
}
