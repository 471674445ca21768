//! App - アプリケーション層
//!
//! ports を組み合わせてレビュープロンプトのロジックを実装します。
//!
//! # 主要コンポーネント
//! - **ReviewPrompt**: evaluate / open_store_page / status
//! - **ReviewPromptBuilder**: collaborator のワイヤリングと起動時検証
//! - **PromptStatus**: 永続化された状態のスナップショット

pub mod builder;
pub mod prompt;
pub mod status;

// 主要な型を再エクスポート
pub use self::builder::ReviewPromptBuilder;
pub use self::prompt::{PROMPT_DELAY, ReviewPrompt};
pub use self::status::PromptStatus;
