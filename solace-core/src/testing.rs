//! Testing utilities for the companion dialogue.
//!
//! This module provides tools for integration testing:
//! - `TestHarness` for scripted conversation scenarios
//! - Assertion helpers for verifying dialogue state

use crate::catalog::FeatureId;
use crate::session::{ChatSession, Reply, SessionConfig};

/// Test harness for running conversation scenarios.
///
/// Uses a fixed RNG seed so reply selection is reproducible.
pub struct TestHarness {
    /// The chat session under test.
    pub session: ChatSession,
}

impl TestHarness {
    /// Create a new harness with the default test seed.
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// Create a harness with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            session: ChatSession::new(SessionConfig::new().with_seed(seed)),
        }
    }

    /// Send user input and get the reply.
    pub fn say(&mut self, text: &str) -> Reply {
        self.session.handle_turn(text)
    }

    /// Send several inputs, returning only the last reply.
    pub fn say_all(&mut self, inputs: &[&str]) -> Option<Reply> {
        let mut last = None;
        for input in inputs {
            last = Some(self.session.handle_turn(input));
        }
        last
    }

    /// Currently active feature, if any.
    pub fn active_feature(&self) -> Option<FeatureId> {
        self.session.state().active_feature
    }

    /// Current step index within the active feature.
    pub fn feature_step(&self) -> usize {
        self.session.state().feature_step
    }

    /// Whether an offer is pending a yes/no.
    pub fn awaiting_consent(&self) -> bool {
        self.session.state().awaiting_consent
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the session is idle: no pending offer and no active feature.
#[track_caller]
pub fn assert_inactive(harness: &TestHarness) {
    assert!(
        harness.session.state().is_idle(),
        "Expected idle session, got state {:?}",
        harness.session.state()
    );
}

/// Assert the given feature is active.
#[track_caller]
pub fn assert_active(harness: &TestHarness, feature: FeatureId) {
    assert_eq!(
        harness.active_feature(),
        Some(feature),
        "Expected {feature:?} to be active"
    );
}

/// Assert an offer of the given feature is pending.
#[track_caller]
pub fn assert_awaiting(harness: &TestHarness, feature: FeatureId) {
    assert!(
        harness.awaiting_consent(),
        "Expected a pending offer of {feature:?}"
    );
    assert_eq!(
        harness.session.state().last_offered,
        Some(feature),
        "Expected the pending offer to be {feature:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_runs_a_scripted_scenario() {
        let mut harness = TestHarness::new();
        harness.say("I'm feeling tired");
        assert_awaiting(&harness, FeatureId::Breathing);

        harness.say("yes");
        assert_active(&harness, FeatureId::Breathing);

        harness.say("stop");
        assert_inactive(&harness);
    }

    #[test]
    fn test_say_all_returns_last_reply() {
        let mut harness = TestHarness::new();
        let last = harness.say_all(&["hello", "I'm tired", "no thanks"]);
        assert!(last.is_some());
        assert_inactive(&harness);
    }

    #[test]
    fn test_same_seed_same_replies() {
        let mut a = TestHarness::with_seed(7);
        let mut b = TestHarness::with_seed(7);
        for input in ["hello", "I feel great", "motivate me"] {
            assert_eq!(a.say(input).text, b.say(input).text);
        }
    }
}
