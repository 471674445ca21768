//! VersionProvider port - 実行中アプリのバージョン

/// VersionProvider はホストアプリのビルドメタデータからバージョンを返す
///
/// None はパッケージングの設定ミスを意味する（一時的な失敗ではない）。
pub trait VersionProvider: Send + Sync {
    fn current_version(&self) -> Option<String>;
}
