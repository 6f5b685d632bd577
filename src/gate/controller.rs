use chrono::{DateTime, Utc};
use log::{error, info, warn};

use super::record::VerificationRecord;
use super::storage::{KeyValueStore, StorageError};
use crate::config::AGE_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// A valid record exists; the page is released.
    Verified,
    /// The modal is shown and the page is scroll locked.
    Prompting,
    /// The visitor chose to leave. Nothing was written.
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    Confirm,
    Exit,
}

/// Keyboard shortcuts while the modal has focus.
pub fn key_action(key: &str) -> Option<GateAction> {
    match key {
        "Enter" => Some(GateAction::Confirm),
        "Escape" => Some(GateAction::Exit),
        _ => None,
    }
}

fn read_record<S: KeyValueStore>(store: &S) -> Result<Option<VerificationRecord>, StorageError> {
    match store.get_item(AGE_STORAGE_KEY)? {
        Some(raw) => Ok(Some(VerificationRecord::from_json(&raw)?)),
        None => Ok(None),
    }
}

fn clear_record<S: KeyValueStore>(store: &S) {
    if let Err(e) = store.remove_item(AGE_STORAGE_KEY) {
        warn!("Failed to clear age verification: {}", e);
    }
}

/// Decides the initial gate state from storage. Never fails: anything other
/// than a valid record means the visitor has to confirm again.
pub fn resolve<S: KeyValueStore>(store: &S, now: DateTime<Utc>) -> GateState {
    match read_record(store) {
        Ok(Some(record)) if record.is_valid_at(now) => GateState::Verified,
        Ok(Some(_)) => {
            info!("Age verification expired");
            clear_record(store);
            GateState::Prompting
        }
        Ok(None) => GateState::Prompting,
        Err(StorageError::Corrupt(e)) => {
            warn!("Discarding unreadable age verification: {}", e);
            clear_record(store);
            GateState::Prompting
        }
        Err(e) => {
            error!("Age verification check error: {}", e);
            GateState::Prompting
        }
    }
}

/// Stores a fresh record valid for the configured number of days from `now`.
pub fn confirm<S: KeyValueStore>(store: &S, now: DateTime<Utc>) -> Result<VerificationRecord, StorageError> {
    let record = VerificationRecord::issue(now);
    store.set_item(AGE_STORAGE_KEY, &record.to_json()?)?;
    Ok(record)
}

/// Applies a modal action. Only a prompting gate reacts; exiting leaves
/// storage untouched, and a failed write still releases this page session.
pub fn apply<S: KeyValueStore>(
    store: &S,
    state: GateState,
    action: GateAction,
    now: DateTime<Utc>,
) -> GateState {
    if state != GateState::Prompting {
        return state;
    }
    match action {
        GateAction::Confirm => {
            match confirm(store, now) {
                Ok(record) => info!("Age verified until {}", record.expiry),
                Err(e) => error!("Failed to store age verification: {}", e),
            }
            GateState::Verified
        }
        GateAction::Exit => GateState::Exited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        writes: RefCell<usize>,
    }

    impl MemoryStore {
        fn with(raw: &str) -> Self {
            let store = Self::default();
            store.items.borrow_mut().insert(AGE_STORAGE_KEY.to_string(), raw.to_string());
            store
        }

        fn raw(&self) -> Option<String> {
            self.items.borrow().get(AGE_STORAGE_KEY).cloned()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            *self.writes.borrow_mut() += 1;
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }

    struct DisabledStore;

    impl KeyValueStore for DisabledStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Access("QuotaExceededError".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn missing_record_prompts() {
        let store = MemoryStore::default();
        assert_eq!(resolve(&store, now()), GateState::Prompting);
    }

    #[test]
    fn valid_record_releases_page() {
        let expiry = now().timestamp_millis() + 1;
        let store = MemoryStore::with(&format!(r#"{{"verified":true,"expiry":{}}}"#, expiry));
        assert_eq!(resolve(&store, now()), GateState::Verified);
        assert!(store.raw().is_some());
    }

    #[test]
    fn expired_records_are_cleared() {
        let now_ms = now().timestamp_millis();
        for expiry in [now_ms, now_ms - 1, 0, i64::MIN] {
            let store = MemoryStore::with(&format!(r#"{{"verified":true,"expiry":{}}}"#, expiry));
            assert_eq!(resolve(&store, now()), GateState::Prompting);
            assert_eq!(store.raw(), None);
        }
    }

    #[test]
    fn unverified_record_is_cleared() {
        let store = MemoryStore::with(r#"{"verified":false,"expiry":9999999999999}"#);
        assert_eq!(resolve(&store, now()), GateState::Prompting);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn corrupt_record_is_treated_as_absent() {
        let store = MemoryStore::with("{not json");
        assert_eq!(resolve(&store, now()), GateState::Prompting);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn unavailable_storage_prompts() {
        assert_eq!(resolve(&DisabledStore, now()), GateState::Prompting);
    }

    #[test]
    fn confirm_uses_confirmation_time() {
        let store = MemoryStore::default();
        let load_time = now();
        assert_eq!(resolve(&store, load_time), GateState::Prompting);

        let confirmed_at = load_time + Duration::minutes(7);
        let record = confirm(&store, confirmed_at).unwrap();
        assert_eq!(
            record.expiry,
            (confirmed_at + Duration::days(30)).timestamp_millis()
        );

        let stored = VerificationRecord::from_json(&store.raw().unwrap()).unwrap();
        assert_eq!(stored, record);
        assert_eq!(resolve(&store, confirmed_at + Duration::days(29)), GateState::Verified);
        assert_eq!(resolve(&store, confirmed_at + Duration::days(30)), GateState::Prompting);
    }

    #[test]
    fn confirm_reports_write_failures() {
        assert!(matches!(
            confirm(&DisabledStore, now()),
            Err(StorageError::Access(_))
        ));
    }

    #[test]
    fn resolving_never_writes() {
        let store = MemoryStore::default();
        resolve(&store, now());
        assert_eq!(*store.writes.borrow(), 0);
    }

    #[test]
    fn exit_never_writes() {
        let store = MemoryStore::default();
        let state = resolve(&store, now());
        assert_eq!(apply(&store, state, GateAction::Exit, now()), GateState::Exited);
        assert_eq!(*store.writes.borrow(), 0);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn confirm_action_releases_even_when_storage_fails() {
        let state = apply(&DisabledStore, GateState::Prompting, GateAction::Confirm, now());
        assert_eq!(state, GateState::Verified);
    }

    #[test]
    fn settled_gate_ignores_actions() {
        let store = MemoryStore::default();
        assert_eq!(apply(&store, GateState::Exited, GateAction::Confirm, now()), GateState::Exited);
        assert_eq!(apply(&store, GateState::Verified, GateAction::Exit, now()), GateState::Verified);
        assert_eq!(*store.writes.borrow(), 0);
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(key_action("Enter"), Some(GateAction::Confirm));
        assert_eq!(key_action("Escape"), Some(GateAction::Exit));
        assert_eq!(key_action("Tab"), None);
    }
}
