//! review-prompt-core
//!
//! アプリの「レビューをお願いする」プロンプトをいつ出すかを決める小さなコア。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（config, keys, decision, errors）
//! - **ports**: 抽象化レイヤー（KeyValueStore, VersionProvider, ReviewTrigger, UrlOpener, Scheduler）
//! - **app**: アプリケーションロジック（ReviewPrompt, builder, status）
//! - **impls**: 実装（InMemory / File ストア、Tokio / Manual スケジューラ など）

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;

pub use app::{ReviewPrompt, ReviewPromptBuilder};
pub use domain::{PromptConfig, PromptDecision, ReviewPromptError};
