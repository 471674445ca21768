//! Recording collaborators - 呼び出しを記録するだけの ReviewTrigger / UrlOpener
//!
//! ホストアプリのテストや CLI の dry-run で使う。

use crate::ports::{ReviewTrigger, UrlOpener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use url::Url;

#[derive(Debug, Default)]
pub struct RecordingReviewTrigger {
    requests: AtomicUsize,
}

impl RecordingReviewTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// request_review() が呼ばれた回数
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl ReviewTrigger for RecordingReviewTrigger {
    fn request_review(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
pub struct RecordingUrlOpener {
    opened: Mutex<Vec<Url>>,
}

impl RecordingUrlOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// 開かれた URL（呼び出し順）
    pub fn opened(&self) -> Vec<Url> {
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UrlOpener for RecordingUrlOpener {
    fn open(&self, url: &Url) {
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.clone());
    }
}
