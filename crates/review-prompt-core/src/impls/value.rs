use serde::{Deserialize, Serialize};

/// ストアに保存される値。型が合わない読み出しはデフォルト値扱い。
///
/// 整数・文字列以外の JSON（`5.0`, `null`, `true` など）も `Other` として保持し、
/// ファイルを開くこと自体は失敗させない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredValue {
    Integer(i64),
    Text(String),
    Other(serde_json::Value),
}

impl StoredValue {
    pub(crate) fn as_integer(&self) -> Option<i64> {
        match self {
            StoredValue::Integer(v) => Some(*v),
            StoredValue::Text(_) | StoredValue::Other(_) => None,
        }
    }

    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            StoredValue::Text(s) => Some(s),
            StoredValue::Integer(_) | StoredValue::Other(_) => None,
        }
    }
}
