//! Status - 永続化された 2 つの値と設定のスナップショット

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptStatus {
    pub store_id: String,
    pub promotion_threshold: u32,
    pub process_completed_count: i64,
    pub last_version_prompted: Option<String>,
}

impl PromptStatus {
    /// 閾値に届くまでに必要な evaluate の回数（到達済みなら 0）
    pub fn remaining_until_threshold(&self) -> i64 {
        i64::from(self.promotion_threshold)
            .saturating_sub(self.process_completed_count)
            .max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn status(count: i64) -> PromptStatus {
        PromptStatus {
            store_id: "123".to_string(),
            promotion_threshold: 3,
            process_completed_count: count,
            last_version_prompted: None,
        }
    }

    #[rstest]
    #[case::fresh(0, 3)]
    #[case::one_left(2, 1)]
    #[case::reached(3, 0)]
    #[case::past(10, 0)]
    fn remaining_until_threshold(#[case] count: i64, #[case] expected: i64) {
        assert_eq!(status(count).remaining_until_threshold(), expected);
    }

    #[test]
    fn remaining_saturates_for_extreme_counters() {
        assert_eq!(status(i64::MIN).remaining_until_threshold(), i64::MAX);
        assert_eq!(status(i64::MAX).remaining_until_threshold(), 0);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let json = serde_json::to_value(status(2)).unwrap();
        assert_eq!(json["process_completed_count"], 2);
        assert_eq!(json["last_version_prompted"], serde_json::Value::Null);
    }
}
