//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! プラットフォーム側の永続ストア、レビュー UI、URL オープン、
//! バージョン情報、遅延実行はすべてここの trait 越しに注入されます。
//! グローバルな状態には一切触れません。

pub mod kv_store;
pub mod version;
pub mod review_trigger;
pub mod url_opener;
pub mod scheduler;

// 主要な trait を再エクスポート
pub use self::kv_store::KeyValueStore;
pub use self::version::VersionProvider;
pub use self::review_trigger::ReviewTrigger;
pub use self::url_opener::UrlOpener;
pub use self::scheduler::{DeferredTask, Scheduler};
