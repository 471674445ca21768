//! TokioScheduler - tokio ランタイム上の遅延実行
//!
//! # 実装詳細
//! - 渡された Handle 上に `sleep(delay)` → task を spawn
//! - current_thread ランタイムの Handle を渡せば、task は常に同じスレッド
//!   （UI を扱えるコンテキスト）で実行される
//! - JoinHandle を保持しておき、`drain()` で未完了の task を待てる
//!   （短命なプロセスが終了前に遅延処理を終わらせるため）

use crate::ports::{DeferredTask, Scheduler};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::task::JoinHandle;
use tracing::warn;

pub struct TokioScheduler {
    handle: Handle,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// 現在の tokio コンテキストの Handle を使う
    pub fn from_current() -> Result<Self, TryCurrentError> {
        Ok(Self::new(Handle::try_current()?))
    }

    /// まだ完了していない task の数
    pub fn outstanding(&self) -> usize {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|join| !join.is_finished());
        pending.len()
    }

    /// スケジュール済みの task がすべて終わるまで待つ
    ///
    /// 待っている間に追加された task も待つ。
    pub async fn drain(&self) {
        loop {
            let joins = {
                let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
                std::mem::take(&mut *pending)
            };
            if joins.is_empty() {
                break;
            }
            for join in joins {
                if let Err(e) = join.await {
                    warn!(error = %e, "deferred task did not complete");
                }
            }
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: DeferredTask) {
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|join| !join.is_finished());
        pending.push(join);
    }
}
