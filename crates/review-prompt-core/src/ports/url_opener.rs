//! UrlOpener port - URL を開く

use url::Url;

/// UrlOpener はプラットフォームの「URL を開く」機能
///
/// fire-and-forget。結果は返さない。
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &Url);
}
