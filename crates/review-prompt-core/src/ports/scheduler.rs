//! Scheduler port - 遅延実行の抽象化
//!
//! # テスト容易性
//! - trait により遅延実行を差し替え可能
//! - 本番は TokioScheduler、テストでは ManualScheduler（仮想時計）を使用

use std::time::Duration;

/// 遅延実行される処理
pub type DeferredTask = Box<dyn FnOnce() + Send + 'static>;

/// Scheduler は `delay` 経過後に UI を扱えるコンテキストで `task` を実行
///
/// # 設計原則
/// - fire-and-forget（キャンセル手段は公開しない）
/// - 他の遅延処理との順序保証はない
/// - プロセスが先に終了すれば task は実行されなくてもよい
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: DeferredTask);
}
