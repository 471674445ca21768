//! Errors - エラー型
//!
//! evaluate / open_store_page が同期的に返すエラーはどちらもリトライ不要。
//! ホスト側のパッケージングや設定の誤りを示す。

use thiserror::Error;

/// ReviewPrompt の操作エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewPromptError {
    #[error("expected to find an application version in the host metadata")]
    VersionUnavailable,

    #[error("expected a valid review URL (store_id={store_id:?})")]
    InvalidReviewUrl { store_id: String },
}

/// PromptConfig の構築エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("promotion threshold must be at least 1 (got {0})")]
    InvalidThreshold(u32),
}

/// ReviewPromptBuilder の構築エラー
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Missing collaborators: {0:?}. These ports must be supplied before build().")]
    MissingCollaborators(Vec<&'static str>),
}

/// FileKeyValueStore を開くときのエラー
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("store json: {0}")]
    Json(#[from] serde_json::Error),
}
