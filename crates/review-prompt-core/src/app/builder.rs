//! ReviewPromptBuilder - collaborator のワイヤリング
//!
//! # Fail-fast 設計
//! - build() 時にすべての port が渡されているかチェック
//! - 不足があれば足りない port の名前をすべて BuildError に入れて返す

use super::prompt::ReviewPrompt;
use crate::domain::{BuildError, PromptConfig};
use crate::ports::{KeyValueStore, ReviewTrigger, Scheduler, UrlOpener, VersionProvider};
use std::sync::Arc;

/// # 使用例
/// ```
/// use std::sync::Arc;
/// use review_prompt_core::{PromptConfig, ReviewPromptBuilder};
/// use review_prompt_core::impls::{
///     InMemoryKeyValueStore, ManualScheduler, RecordingReviewTrigger, RecordingUrlOpener,
///     StaticVersion,
/// };
///
/// let prompt = ReviewPromptBuilder::new(PromptConfig::new("123456789", 3).unwrap())
///     .store(Arc::new(InMemoryKeyValueStore::new()))
///     .version_provider(Arc::new(StaticVersion::new("1.0")))
///     .review_trigger(Arc::new(RecordingReviewTrigger::new()))
///     .url_opener(Arc::new(RecordingUrlOpener::new()))
///     .scheduler(Arc::new(ManualScheduler::new()))
///     .build()
///     .unwrap();
/// assert_eq!(prompt.config().store_id(), "123456789");
/// ```
pub struct ReviewPromptBuilder {
    config: PromptConfig,
    store: Option<Arc<dyn KeyValueStore>>,
    version: Option<Arc<dyn VersionProvider>>,
    trigger: Option<Arc<dyn ReviewTrigger>>,
    opener: Option<Arc<dyn UrlOpener>>,
    scheduler: Option<Arc<dyn Scheduler>>,
}

impl ReviewPromptBuilder {
    pub fn new(config: PromptConfig) -> Self {
        Self {
            config,
            store: None,
            version: None,
            trigger: None,
            opener: None,
            scheduler: None,
        }
    }

    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn version_provider(mut self, version: Arc<dyn VersionProvider>) -> Self {
        self.version = Some(version);
        self
    }

    pub fn review_trigger(mut self, trigger: Arc<dyn ReviewTrigger>) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn url_opener(mut self, opener: Arc<dyn UrlOpener>) -> Self {
        self.opener = Some(opener);
        self
    }

    pub fn scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn build(self) -> Result<ReviewPrompt, BuildError> {
        let mut missing = Vec::new();
        if self.store.is_none() {
            missing.push("store");
        }
        if self.version.is_none() {
            missing.push("version_provider");
        }
        if self.trigger.is_none() {
            missing.push("review_trigger");
        }
        if self.opener.is_none() {
            missing.push("url_opener");
        }
        if self.scheduler.is_none() {
            missing.push("scheduler");
        }

        match (self.store, self.version, self.trigger, self.opener, self.scheduler) {
            (Some(store), Some(version), Some(trigger), Some(opener), Some(scheduler)) => Ok(
                ReviewPrompt::new(self.config, store, version, trigger, opener, scheduler),
            ),
            _ => Err(BuildError::MissingCollaborators(missing)),
        }
    }
}
