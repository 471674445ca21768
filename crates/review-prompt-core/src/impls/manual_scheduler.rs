//! ManualScheduler - 仮想時計で進める遅延実行
//!
//! テストから `advance()` で時間を進めると、期限の来た task が
//! 呼び出し元のスレッドで同期的に実行される。

use crate::ports::{DeferredTask, Scheduler};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

struct Pending {
    due: Duration,
    task: DeferredTask,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    queue: Vec<Pending>,
}

#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 未実行の task の数
    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    /// 未実行の task それぞれの残り時間（期限順）
    pub fn remaining_delays(&self) -> Vec<Duration> {
        let state = self.lock();
        let mut delays: Vec<Duration> = state
            .queue
            .iter()
            .map(|p| p.due.saturating_sub(state.now))
            .collect();
        delays.sort();
        delays
    }

    /// 仮想時計を `by` だけ進め、期限の来た task を実行する
    ///
    /// 実行した task の数を返す。task はロックの外で実行するので、
    /// task の中から再度 schedule してもよい（その task は次回以降の advance で実行）。
    pub fn advance(&self, by: Duration) -> usize {
        let due = {
            let mut state = self.lock();
            state.now += by;
            let now = state.now;
            let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
                state.queue.drain(..).partition(|p| p.due <= now);
            state.queue = rest;
            due.sort_by_key(|p| p.due);
            due
        };
        let ran = due.len();
        for pending in due {
            (pending.task)();
        }
        ran
    }

    /// 最も遅い期限まで時計を進めて、すべて実行する
    pub fn run_all(&self) -> usize {
        let delay = self.remaining_delays().last().copied().unwrap_or_default();
        self.advance(delay)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: DeferredTask) {
        let mut state = self.lock();
        let due = state.now + delay;
        state.queue.push(Pending { due, task });
    }
}
