use std::cell::Cell;

use time::Duration;
use time::macros::datetime;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Clock that advances one second every time it is read.
struct TickingClock {
    next: Cell<OffsetDateTime>,
}

impl TickingClock {
    fn starting_at(start: OffsetDateTime) -> Self {
        Self { next: Cell::new(start) }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> OffsetDateTime {
        let now = self.next.get();
        self.next.set(now + Duration::seconds(1));
        now
    }
}

/// Backend whose writes always fail, as when the storage quota is exhausted.
struct QuotaExceeded {
    inner: MemoryBackend,
}

impl StorageBackend for QuotaExceeded {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write("QuotaExceededError".to_owned()))
    }
}

fn store() -> DiagramStore<MemoryBackend, TickingClock> {
    DiagramStore::new(MemoryBackend::new(), TickingClock::starting_at(datetime!(2025-01-01 09:00 UTC)))
}

fn names(diagrams: &[Diagram]) -> Vec<&str> {
    diagrams.iter().map(|d| d.name.as_str()).collect()
}

// =============================================================
// list
// =============================================================

#[test]
fn list_is_empty_when_nothing_stored() {
    assert!(store().list().unwrap().is_empty());
}

#[test]
fn list_sorts_newest_first() {
    let store = store();
    store.save("first", "graph TD").unwrap();
    store.save("second", "graph LR").unwrap();
    store.save("third", "pie").unwrap();
    assert_eq!(names(&store.list().unwrap()), vec!["third", "second", "first"]);
}

#[test]
fn list_reflects_resave_order() {
    let store = store();
    store.save("a", "1").unwrap();
    store.save("b", "2").unwrap();
    store.save("a", "3").unwrap();
    assert_eq!(names(&store.list().unwrap()), vec!["a", "b"]);
}

#[test]
fn list_reads_blob_written_by_other_clients() {
    let backend = MemoryBackend::new();
    backend
        .set_item(
            STORAGE_KEY,
            r#"[{"name":"old","content":"graph TD","lastUpdated":"2024-03-01T10:00:00.000Z"},
                {"name":"new","content":"pie","lastUpdated":"2024-06-01T10:00:00.000Z"}]"#,
        )
        .unwrap();
    let store = DiagramStore::new(backend, SystemClock);
    let listed = store.list().unwrap();
    assert_eq!(names(&listed), vec!["new", "old"]);
    assert_eq!(listed[1].last_updated, datetime!(2024-03-01 10:00 UTC));
}

#[test]
fn list_surfaces_corrupt_blob() {
    let backend = MemoryBackend::new();
    backend.set_item(STORAGE_KEY, "{not json").unwrap();
    let store = DiagramStore::new(backend, SystemClock);
    assert!(matches!(store.list(), Err(StoreError::Decode(_))));
}

// =============================================================
// save / load_by_name
// =============================================================

#[test]
fn save_then_load_round_trips_content() {
    let store = store();
    let before = datetime!(2025-01-01 09:00 UTC);
    let saved = store.save("Flow", "graph TD\nA-->B").unwrap();
    let loaded = store.load_by_name("Flow").unwrap().unwrap();
    assert_eq!(loaded.content, "graph TD\nA-->B");
    assert_eq!(loaded, saved);
    assert!(loaded.last_updated >= before);
}

#[test]
fn save_with_system_clock_stamps_after_call_start() {
    let store = DiagramStore::new(MemoryBackend::new(), SystemClock);
    let before = OffsetDateTime::now_utc();
    store.save("now", "graph TD").unwrap();
    let loaded = store.load_by_name("now").unwrap().unwrap();
    assert!(loaded.last_updated >= before);
}

#[test]
fn save_existing_name_overwrites_content_and_timestamp() {
    let store = store();
    let first = store.save("Flow", "graph TD").unwrap();
    let second = store.save("Flow", "graph LR").unwrap();
    assert!(second.last_updated > first.last_updated);

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Flow");
    assert_eq!(listed[0].content, "graph LR");
}

#[test]
fn save_keeps_position_of_existing_record() {
    let store = store();
    store.save("a", "1").unwrap();
    store.save("b", "2").unwrap();
    store.save("a", "3").unwrap();
    let raw = store.backend().get_item(STORAGE_KEY).unwrap().unwrap();
    let stored: Vec<Diagram> = serde_json::from_str(&raw).unwrap();
    assert_eq!(names(&stored), vec!["a", "b"]);
}

#[test]
fn save_rejects_invalid_name_without_writing() {
    let store = store();
    let err = store.save("a<b", "graph TD").unwrap_err();
    assert!(matches!(err, StoreError::Invalid(ValidationError::ForbiddenChar('<'))));
    assert!(store.backend().get_item(STORAGE_KEY).unwrap().is_none());
}

#[test]
fn save_surfaces_write_failure() {
    let inner = MemoryBackend::new();
    inner
        .set_item(STORAGE_KEY, r#"[{"name":"kept","content":"pie","lastUpdated":"2024-06-01T10:00:00Z"}]"#)
        .unwrap();
    let store = DiagramStore::new(QuotaExceeded { inner }, SystemClock);
    let err = store.save("Flow", "graph TD").unwrap_err();
    assert!(matches!(err, StoreError::Write(_)));
    assert_eq!(names(&store.list().unwrap()), vec!["kept"]);
}

#[test]
fn load_missing_name_is_none() {
    let store = store();
    store.save("Flow", "graph TD").unwrap();
    assert!(store.load_by_name("Other").unwrap().is_none());
}

#[test]
fn persisted_layout_uses_camel_case_keys() {
    let store = store();
    store.save("Flow", "graph TD").unwrap();
    let raw = store.backend().get_item(STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["name"], "Flow");
    assert_eq!(value[0]["content"], "graph TD");
    assert_eq!(value[0]["lastUpdated"], "2025-01-01T09:00:00Z");
}

#[test]
fn custom_key_isolates_collections() {
    let store = DiagramStore::with_key(MemoryBackend::new(), SystemClock, "scratch");
    store.save("x", "pie").unwrap();
    assert!(store.backend().get_item(STORAGE_KEY).unwrap().is_none());
    assert!(store.backend().get_item("scratch").unwrap().is_some());
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_removes_and_returns_remaining() {
    let store = store();
    store.save("a", "1").unwrap();
    store.save("b", "2").unwrap();
    let remaining = store.delete("a").unwrap();
    assert_eq!(names(&remaining), vec!["b"]);
    assert!(store.load_by_name("a").unwrap().is_none());
}

#[test]
fn delete_missing_name_leaves_collection_unchanged() {
    let store = store();
    store.save("a", "1").unwrap();
    let before = store.backend().get_item(STORAGE_KEY).unwrap();
    let remaining = store.delete("zzz").unwrap();
    assert_eq!(names(&remaining), vec!["a"]);
    assert_eq!(store.backend().get_item(STORAGE_KEY).unwrap(), before);
}

#[test]
fn delete_missing_name_does_not_write() {
    let store = DiagramStore::new(QuotaExceeded { inner: MemoryBackend::new() }, SystemClock);
    assert!(store.delete("nothing").unwrap().is_empty());
}

#[test]
fn delete_surfaces_write_failure() {
    let inner = MemoryBackend::new();
    inner
        .set_item(STORAGE_KEY, r#"[{"name":"kept","content":"pie","lastUpdated":"2024-06-01T10:00:00Z"}]"#)
        .unwrap();
    let store = DiagramStore::new(QuotaExceeded { inner }, SystemClock);
    assert!(matches!(store.delete("kept"), Err(StoreError::Write(_))));
    assert_eq!(names(&store.list().unwrap()), vec!["kept"]);
}

// =============================================================
// Scenario
// =============================================================

#[test]
fn save_list_delete_scenario() {
    let store = store();
    store.save("Flow", "graph TD\nA-->B").unwrap();

    let listed = store.list().unwrap();
    let flows: Vec<_> = listed.iter().filter(|d| d.name == "Flow").collect();
    assert_eq!(flows.len(), 1);
    assert_eq!(flows[0].content, "graph TD\nA-->B");

    store.delete("Flow").unwrap();
    assert!(store.list().unwrap().iter().all(|d| d.name != "Flow"));
}

#[test]
fn store_error_messages_describe_cause() {
    assert_eq!(StoreError::Unavailable.to_string(), "storage is unavailable");
    assert_eq!(
        StoreError::Write("quota".to_owned()).to_string(),
        "failed to save diagrams: quota"
    );
    assert_eq!(
        StoreError::from(ValidationError::Empty).to_string(),
        "Diagram name cannot be empty"
    );
}
