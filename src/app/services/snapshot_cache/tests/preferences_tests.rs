//! Tests for the preference store

use crate::app::services::snapshot_cache::PreferenceStore;
use crate::constants::PREF_SELECTED_SPECIES;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn test_set_then_get() {
    let dir = tempdir().unwrap();
    let store = PreferenceStore::new(dir.path());

    store.set(PREF_SELECTED_SPECIES, "Sailfish").unwrap();

    assert_eq!(
        store.get(PREF_SELECTED_SPECIES).unwrap(),
        Some(json!("Sailfish"))
    );
    assert_eq!(
        store.get_string(PREF_SELECTED_SPECIES).unwrap().as_deref(),
        Some("Sailfish")
    );
}

#[test]
fn test_missing_file_reads_empty() {
    let dir = tempdir().unwrap();
    let store = PreferenceStore::new(dir.path());

    assert!(store.entries().unwrap().is_empty());
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn test_values_survive_new_store_instance() {
    let dir = tempdir().unwrap();
    PreferenceStore::new(dir.path())
        .set("top_n", 5)
        .unwrap();

    let reopened = PreferenceStore::new(dir.path());
    assert_eq!(reopened.get("top_n").unwrap(), Some(json!(5)));
    assert!(reopened.path().ends_with("user-preferences.json"));
}

#[test]
fn test_overwrite_and_keep_other_keys() {
    let dir = tempdir().unwrap();
    let store = PreferenceStore::new(dir.path());

    store.set(PREF_SELECTED_SPECIES, "Sailfish").unwrap();
    store.set("weight_unit", "lbs").unwrap();
    store.set(PREF_SELECTED_SPECIES, "Black Marlin").unwrap();

    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[PREF_SELECTED_SPECIES].value, json!("Black Marlin"));
    assert_eq!(entries["weight_unit"].value, json!("lbs"));
}

#[test]
fn test_get_string_ignores_non_strings() {
    let dir = tempdir().unwrap();
    let store = PreferenceStore::new(dir.path());
    store.set(PREF_SELECTED_SPECIES, 42).unwrap();

    assert_eq!(store.get_string(PREF_SELECTED_SPECIES).unwrap(), None);
}

#[test]
fn test_remove() {
    let dir = tempdir().unwrap();
    let store = PreferenceStore::new(dir.path());
    store.set(PREF_SELECTED_SPECIES, "Sailfish").unwrap();

    assert!(store.remove(PREF_SELECTED_SPECIES).unwrap());
    assert!(!store.remove(PREF_SELECTED_SPECIES).unwrap());
    assert_eq!(store.get(PREF_SELECTED_SPECIES).unwrap(), None);
}
