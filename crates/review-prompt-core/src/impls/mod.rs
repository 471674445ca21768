//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryKeyValueStore**: テスト・開発用のストア
//! - **FileKeyValueStore**: JSON ファイルに永続化するストア
//! - **TokioScheduler**: tokio ランタイム上の遅延実行
//! - **ManualScheduler**: 仮想時計でテストから進める遅延実行
//! - **StaticVersion**: 固定バージョン
//! - **RecordingReviewTrigger / RecordingUrlOpener**: 呼び出しを記録するテスト用
//! - **SystemUrlOpener**: OS の URL オープンコマンドを起動

mod value;

pub mod inmem_store;
pub mod file_store;
pub mod tokio_scheduler;
pub mod manual_scheduler;
pub mod static_version;
pub mod recording;
pub mod system_opener;

// 主要な型を再エクスポート
pub use self::inmem_store::InMemoryKeyValueStore;
pub use self::file_store::FileKeyValueStore;
pub use self::tokio_scheduler::TokioScheduler;
pub use self::manual_scheduler::ManualScheduler;
pub use self::static_version::StaticVersion;
pub use self::recording::{RecordingReviewTrigger, RecordingUrlOpener};
pub use self::system_opener::SystemUrlOpener;
