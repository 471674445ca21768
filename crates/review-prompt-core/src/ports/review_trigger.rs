//! ReviewTrigger port - プラットフォームのレビュー UI

/// ReviewTrigger はネイティブの「このアプリを評価」UI を要求
///
/// fire-and-forget。OS 側のレート制限で何も表示されないこともある。
pub trait ReviewTrigger: Send + Sync {
    fn request_review(&self);
}
