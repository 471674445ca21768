//! Decision model: whether an evaluate call should schedule a review prompt.
//!
//! This module defines the PromptDecision type (what evaluate did) and the
//! ThresholdRule (how the decision is derived from the counter and versions).

/// The outcome of one evaluate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptDecision {
    /// A deferred prompt step was scheduled for this version.
    Scheduled { version: String },

    /// The counter has not reached the promotion threshold yet.
    BelowThreshold { count: i64, threshold: u32 },

    /// A prompt was already triggered for this version.
    AlreadyPrompted { version: String },
}

impl PromptDecision {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, PromptDecision::Scheduled { .. })
    }
}

/// Counter threshold + version distinctness rule.
///
/// This is a pure function: no store access, no scheduling.
/// Executing the decision is handled by `ReviewPrompt`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdRule {
    threshold: u32,
}

impl ThresholdRule {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Decide given the already-incremented counter.
    ///
    /// Threshold is checked first, so a below-threshold call reports
    /// `BelowThreshold` even when the version was already prompted.
    pub fn decide(&self, count: i64, current: &str, last_prompted: Option<&str>) -> PromptDecision {
        if count < i64::from(self.threshold) {
            return PromptDecision::BelowThreshold {
                count,
                threshold: self.threshold,
            };
        }
        if last_prompted == Some(current) {
            return PromptDecision::AlreadyPrompted {
                version: current.to_string(),
            };
        }
        PromptDecision::Scheduled {
            version: current.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first_call(1, None)]
    #[case::just_below(2, None)]
    #[case::below_but_prompted(2, Some("1.0"))]
    #[case::below_other_version(0, Some("0.9"))]
    fn below_threshold_never_schedules(#[case] count: i64, #[case] last: Option<&str>) {
        let rule = ThresholdRule::new(3);
        let decision = rule.decide(count, "1.0", last);
        assert_eq!(decision, PromptDecision::BelowThreshold { count, threshold: 3 });
    }

    #[rstest]
    #[case::never_prompted(3, None)]
    #[case::older_version(4, Some("0.9"))]
    #[case::far_past_threshold(1_000, Some("0.1"))]
    fn reaching_threshold_with_new_version_schedules(#[case] count: i64, #[case] last: Option<&str>) {
        let rule = ThresholdRule::new(3);
        let decision = rule.decide(count, "1.0", last);
        assert_eq!(
            decision,
            PromptDecision::Scheduled {
                version: "1.0".to_string()
            }
        );
        assert!(decision.is_scheduled());
    }

    #[test]
    fn same_version_is_not_prompted_again() {
        let rule = ThresholdRule::new(3);
        let decision = rule.decide(4, "1.0", Some("1.0"));
        assert_eq!(
            decision,
            PromptDecision::AlreadyPrompted {
                version: "1.0".to_string()
            }
        );
    }

    #[test]
    fn threshold_of_one_schedules_on_first_call() {
        let rule = ThresholdRule::new(1);
        assert!(rule.decide(1, "2.3.1", None).is_scheduled());
    }
}
