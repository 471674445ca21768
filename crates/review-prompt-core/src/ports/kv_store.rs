//! KeyValueStore port - プロセスをまたいで永続化されるキー・バリューストア

use crate::domain::StoreKey;

/// KeyValueStore は整数と文字列をキーごとに保存
///
/// # 設計原則
/// - 単一キー単位でアトミック（複数キーにまたがるトランザクションはない）
/// - 書き込みは常に成功したものとして扱う（失敗は実装側でログに残す）
///
/// # Thread Safety
/// - 遅延実行のクロージャから使うため `Send + Sync` を要求
pub trait KeyValueStore: Send + Sync {
    /// 整数を取得（未保存なら 0）
    fn get_integer(&self, key: StoreKey) -> i64;

    fn set_integer(&self, key: StoreKey, value: i64);

    /// 文字列を取得（未保存なら None）
    fn get_string(&self, key: StoreKey) -> Option<String>;

    fn set_string(&self, key: StoreKey, value: &str);
}
