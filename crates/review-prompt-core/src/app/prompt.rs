//! ReviewPrompt - レビュープロンプトを出すかどうかの判定と、ストアページを開く処理
//!
//! # evaluate のフロー
//! 1. カウンタを読んで +1 し、すぐに書き戻す（プロンプトを出さなくても必ず）
//! 2. VersionProvider から現在のバージョンを取得（なければ VersionUnavailable）
//! 3. 最後にプロンプトを出したバージョンを読む
//! 4. ThresholdRule で判定
//! 5. Scheduled なら 2 秒後に「レビュー要求 → バージョン記録」を Scheduler に登録
//!
//! バージョンの記録は遅延 step の中でしか行わない。プロセスが先に終われば記録されず、
//! 次回また同じバージョンでプロンプトが出うる（ベストエフォート）。

use super::status::PromptStatus;
use crate::domain::{PromptConfig, PromptDecision, ReviewPromptError, StoreKey, ThresholdRule};
use crate::ports::{KeyValueStore, ReviewTrigger, Scheduler, UrlOpener, VersionProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// evaluate から遅延 step までの固定の待ち時間
pub const PROMPT_DELAY: Duration = Duration::from_secs(2);

pub struct ReviewPrompt {
    config: PromptConfig,
    rule: ThresholdRule,
    store: Arc<dyn KeyValueStore>,
    version: Arc<dyn VersionProvider>,
    trigger: Arc<dyn ReviewTrigger>,
    opener: Arc<dyn UrlOpener>,
    scheduler: Arc<dyn Scheduler>,
}

impl ReviewPrompt {
    pub(crate) fn new(
        config: PromptConfig,
        store: Arc<dyn KeyValueStore>,
        version: Arc<dyn VersionProvider>,
        trigger: Arc<dyn ReviewTrigger>,
        opener: Arc<dyn UrlOpener>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        let rule = ThresholdRule::new(config.promotion_threshold());
        Self {
            config,
            rule,
            store,
            version,
            trigger,
            opener,
            scheduler,
        }
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// カウンタを進め、条件を満たせばレビュープロンプトを予約する
    ///
    /// 返り値の PromptDecision は観測用。無視してよい。
    pub fn evaluate(&self) -> Result<PromptDecision, ReviewPromptError> {
        let count = self
            .store
            .get_integer(StoreKey::ProcessCompletedCount)
            .saturating_add(1);
        self.store.set_integer(StoreKey::ProcessCompletedCount, count);
        debug!(count, "incremented process completed count");

        let current = self
            .version
            .current_version()
            .filter(|v| !v.is_empty())
            .ok_or(ReviewPromptError::VersionUnavailable)?;
        let last_prompted = self.store.get_string(StoreKey::LastVersionPromptedForReview);

        let decision = self.rule.decide(count, &current, last_prompted.as_deref());
        match &decision {
            PromptDecision::Scheduled { version } => {
                info!(count, %version, delay = ?PROMPT_DELAY, "scheduling review prompt");
                self.schedule_prompt(version.clone());
            }
            skipped => debug!(decision = ?skipped, "review prompt not scheduled"),
        }
        Ok(decision)
    }

    fn schedule_prompt(&self, version: String) {
        let store = Arc::clone(&self.store);
        let trigger = Arc::clone(&self.trigger);
        self.scheduler.schedule(
            PROMPT_DELAY,
            Box::new(move || {
                // 先に走った step が同じバージョンを記録済みなら何もしない
                let last = store.get_string(StoreKey::LastVersionPromptedForReview);
                if last.as_deref() == Some(version.as_str()) {
                    debug!(%version, "review prompt already requested for this version");
                    return;
                }
                trigger.request_review();
                store.set_string(StoreKey::LastVersionPromptedForReview, &version);
                info!(%version, "requested review prompt");
            }),
        );
    }

    /// `<base>/app/<store_id>?action=write-review` を組み立てる
    pub fn review_url(&self) -> Result<Url, ReviewPromptError> {
        let store_id = self.config.store_id();
        let invalid = || ReviewPromptError::InvalidReviewUrl {
            store_id: store_id.to_string(),
        };

        if store_id.is_empty() || !store_id.chars().all(is_unreserved) {
            return Err(invalid());
        }

        let raw = format!(
            "{}/app/{}?action=write-review",
            self.config.store_base_url(),
            store_id
        );
        let url = Url::parse(&raw).map_err(|_| invalid())?;
        // "." や ".." はパス正規化で消えるので、ID がそのまま残っているかも確認
        if url.cannot_be_a_base() || !url.path().ends_with(&format!("/app/{store_id}")) {
            return Err(invalid());
        }
        Ok(url)
    }

    /// ストアの「レビューを書く」ページを開く
    ///
    /// URL が組み立てられなければ opener は呼ばない。
    pub fn open_store_page(&self) -> Result<Url, ReviewPromptError> {
        let url = self.review_url()?;
        info!(%url, "opening store review page");
        self.opener.open(&url);
        Ok(url)
    }

    pub fn status(&self) -> PromptStatus {
        PromptStatus {
            store_id: self.config.store_id().to_string(),
            promotion_threshold: self.config.promotion_threshold(),
            process_completed_count: self.store.get_integer(StoreKey::ProcessCompletedCount),
            last_version_prompted: self.store.get_string(StoreKey::LastVersionPromptedForReview),
        }
    }
}

/// RFC 3986 の unreserved 文字
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}
