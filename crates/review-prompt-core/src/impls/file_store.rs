//! FileKeyValueStore - JSON ファイルに永続化するストア
//!
//! # 実装詳細
//! - 起動時に JSON を読み込み、以降はメモリ上の BTreeMap が高速パス
//! - set のたびに一時ファイルへ書いて rename（書き込み途中のファイルを残さない）
//! - ロックを保持したまま書き出すので、ファイルの内容は set の順序どおりになる
//! - 書き込み失敗は warn ログのみ（呼び出し側へは返さない）

use super::value::StoredValue;
use crate::domain::{StoreError, StoreKey};
use crate::ports::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

type Entries = BTreeMap<String, StoredValue>;

#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileKeyValueStore {
    /// ファイルを開く（存在しない・空なら空のストア）
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                Entries::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            Entries::new()
        };
        debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn set(&self, key: StoreKey, value: StoredValue) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.as_str().to_string(), value);
        if let Err(e) = persist(&self.path, &entries) {
            warn!(path = %self.path.display(), %key, error = %e, "failed to persist store");
        }
    }

    fn get(&self, key: StoreKey) -> Option<StoredValue> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key.as_str()).cloned()
    }
}

fn persist(path: &Path, entries: &Entries) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let bytes = serde_json::to_vec_pretty(entries)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl KeyValueStore for FileKeyValueStore {
    fn get_integer(&self, key: StoreKey) -> i64 {
        self.get(key).and_then(|v| v.as_integer()).unwrap_or(0)
    }

    fn set_integer(&self, key: StoreKey, value: i64) {
        self.set(key, StoredValue::Integer(value));
    }

    fn get_string(&self, key: StoreKey) -> Option<String> {
        self.get(key).and_then(|v| v.as_text().map(str::to_string))
    }

    fn set_string(&self, key: StoreKey, value: &str) {
        self.set(key, StoredValue::Text(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path().join("state.json")).unwrap();
        assert_eq!(store.get_integer(StoreKey::ProcessCompletedCount), 0);
        assert_eq!(store.get_string(StoreKey::LastVersionPromptedForReview), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let store = FileKeyValueStore::open(&path).unwrap();
        store.set_integer(StoreKey::ProcessCompletedCount, 5);
        store.set_string(StoreKey::LastVersionPromptedForReview, "2.1");
        drop(store);

        let reopened = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(reopened.get_integer(StoreKey::ProcessCompletedCount), 5);
        assert_eq!(
            reopened.get_string(StoreKey::LastVersionPromptedForReview).as_deref(),
            Some("2.1")
        );
    }

    #[test]
    fn file_uses_readable_key_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let store = FileKeyValueStore::open(&path).unwrap();
        store.set_integer(StoreKey::ProcessCompletedCount, 1);

        let raw = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["process_completed_count"], 1);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn empty_file_opens_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "").unwrap();

        let store = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(store.get_integer(StoreKey::ProcessCompletedCount), 0);
    }

    #[test]
    fn unexpected_json_values_read_as_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(
            &path,
            r#"{"process_completed_count": 5.0, "last_version_prompted_for_review": null, "other": true}"#,
        )
        .unwrap();

        let store = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(store.get_integer(StoreKey::ProcessCompletedCount), 0);
        assert_eq!(store.get_string(StoreKey::LastVersionPromptedForReview), None);

        // 読めないキーも書き戻しで失われない
        store.set_integer(StoreKey::ProcessCompletedCount, 1);
        let raw = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["other"], true);
        assert_eq!(json["process_completed_count"], 1);
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();

        let err = FileKeyValueStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
