//! InMemoryKeyValueStore - 開発用・テスト用のストア
//!
//! プロセス終了で内容は消える。永続化が必要なら FileKeyValueStore を使う。

use super::value::StoredValue;
use crate::domain::StoreKey;
use crate::ports::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<StoreKey, StoredValue>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<StoreKey, StoredValue>) -> R) -> R {
        let mut guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_integer(&self, key: StoreKey) -> i64 {
        self.with_entries(|e| e.get(&key).and_then(StoredValue::as_integer).unwrap_or(0))
    }

    fn set_integer(&self, key: StoreKey, value: i64) {
        self.with_entries(|e| e.insert(key, StoredValue::Integer(value)));
    }

    fn get_string(&self, key: StoreKey) -> Option<String> {
        self.with_entries(|e| e.get(&key).and_then(|v| v.as_text().map(str::to_string)))
    }

    fn set_string(&self, key: StoreKey, value: &str) {
        self.with_entries(|e| e.insert(key, StoredValue::Text(value.to_string())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_integer_defaults_to_zero() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get_integer(StoreKey::ProcessCompletedCount), 0);
    }

    #[test]
    fn missing_string_is_none() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get_string(StoreKey::LastVersionPromptedForReview), None);
    }

    #[test]
    fn keys_are_independent() {
        let store = InMemoryKeyValueStore::new();
        store.set_integer(StoreKey::ProcessCompletedCount, 7);
        store.set_string(StoreKey::LastVersionPromptedForReview, "1.0");

        assert_eq!(store.get_integer(StoreKey::ProcessCompletedCount), 7);
        assert_eq!(
            store.get_string(StoreKey::LastVersionPromptedForReview).as_deref(),
            Some("1.0")
        );
    }

    #[test]
    fn mismatched_type_reads_as_default() {
        let store = InMemoryKeyValueStore::new();
        store.set_string(StoreKey::ProcessCompletedCount, "seven");
        assert_eq!(store.get_integer(StoreKey::ProcessCompletedCount), 0);
    }
}
