use time::macros::datetime;

use super::*;

fn diagram(name: &str) -> Diagram {
    Diagram { name: name.to_owned(), content: "graph TD".to_owned(), last_updated: datetime!(2025-01-01 0:00 UTC) }
}

fn with(names: &[&str]) -> ManageState {
    ManageState { diagrams: names.iter().map(|n| diagram(n)).collect(), ..ManageState::default() }
}

#[test]
fn visible_applies_search() {
    let mut state = with(&["Login Flow", "Billing"]);
    state.search = "flow".to_owned();
    let names: Vec<String> = state.visible().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["Login Flow".to_owned()]);
}

#[test]
fn empty_store_offers_create() {
    let state = ManageState::default();
    let empty = state.empty_state().unwrap();
    assert_eq!(empty.title, "No diagrams yet");
    assert!(empty.offer_create);
}

#[test]
fn unmatched_search_says_not_found() {
    let mut state = with(&["Billing"]);
    state.search = "zzz".to_owned();
    let empty = state.empty_state().unwrap();
    assert_eq!(empty.title, "No diagrams found");
    assert!(!empty.offer_create);
}

#[test]
fn search_on_empty_store_says_not_found() {
    let state = ManageState { search: "x".to_owned(), ..ManageState::default() };
    assert_eq!(state.empty_state().unwrap().title, "No diagrams found");
}

#[test]
fn matches_hide_empty_state() {
    assert!(with(&["a"]).empty_state().is_none());
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(with(&[]).count_label(), "0 diagrams");
    assert_eq!(with(&["a"]).count_label(), "1 diagram");
    assert_eq!(with(&["a", "b"]).count_label(), "2 diagrams");
}

#[test]
fn replace_clears_loading_and_error() {
    let mut state = ManageState { loading: true, error: Some("boom".to_owned()), ..ManageState::default() };
    state.replace(vec![diagram("a")]);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.diagrams.len(), 1);
}
