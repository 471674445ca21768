//! StoreKey - KeyValueStore に保存する 2 つの固定キー

/// KeyValueStore 上のキー
///
/// 永続化される値はこの 2 つだけ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// evaluate() が呼ばれた回数（未保存なら 0）
    ProcessCompletedCount,
    /// 最後にプロンプトを出したバージョン
    LastVersionPromptedForReview,
}

impl StoreKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::ProcessCompletedCount => "process_completed_count",
            StoreKey::LastVersionPromptedForReview => "last_version_prompted_for_review",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
