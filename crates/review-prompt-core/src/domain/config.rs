//! PromptConfig - 起動時に一度だけ作る不変の設定

use super::errors::ConfigError;

/// App Store のレビュー URL のベース
pub const DEFAULT_STORE_BASE_URL: &str = "https://itunes.apple.com";

/// PromptConfig はストア ID とプロンプトを出す閾値を保持
///
/// # 不変条件
/// - `promotion_threshold >= 1`（`new()` で検証）
/// - 構築後は変更しない（ReviewPrompt が所有）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    store_id: String,
    promotion_threshold: u32,
    store_base_url: String,
}

impl PromptConfig {
    /// 新しい PromptConfig を作成
    ///
    /// # Example
    /// ```
    /// use review_prompt_core::PromptConfig;
    ///
    /// let config = PromptConfig::new("123456789", 3).unwrap();
    /// assert_eq!(config.promotion_threshold(), 3);
    /// ```
    pub fn new(store_id: impl Into<String>, promotion_threshold: u32) -> Result<Self, ConfigError> {
        if promotion_threshold == 0 {
            return Err(ConfigError::InvalidThreshold(promotion_threshold));
        }
        Ok(Self {
            store_id: store_id.into(),
            promotion_threshold,
            store_base_url: DEFAULT_STORE_BASE_URL.to_string(),
        })
    }

    /// ストアのベース URL を差し替える（末尾の `/` は無視）
    pub fn with_store_base_url(mut self, base: impl Into<String>) -> Self {
        self.store_base_url = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    pub fn promotion_threshold(&self) -> u32 {
        self.promotion_threshold
    }

    pub fn store_base_url(&self) -> &str {
        &self.store_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threshold_is_rejected() {
        let err = PromptConfig::new("123", 0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidThreshold(0));
    }

    #[test]
    fn defaults_to_app_store_base() {
        let config = PromptConfig::new("123", 1).unwrap();
        assert_eq!(config.store_base_url(), DEFAULT_STORE_BASE_URL);
        assert_eq!(config.store_id(), "123");
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base() {
        let config = PromptConfig::new("123", 1)
            .unwrap()
            .with_store_base_url("https://store.example.com/");
        assert_eq!(config.store_base_url(), "https://store.example.com");
    }
}
