//! StaticVersion - 固定のバージョンを返す VersionProvider

use crate::ports::VersionProvider;

/// 起動時に決まったバージョンを返す（None ならメタデータ欠落を表す）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticVersion(Option<String>);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(Some(version.into()))
    }

    /// バージョンを持たない provider
    pub fn missing() -> Self {
        Self(None)
    }
}

impl VersionProvider for StaticVersion {
    fn current_version(&self) -> Option<String> {
        self.0.clone()
    }
}
