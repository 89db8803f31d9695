//! QA tests for the end-to-end dialogue flow.
//!
//! These tests verify the single-turn contract holds across realistic
//! conversations:
//! - Classification and reply selection
//! - The offer/consent round trip
//! - Fallback totality (every input gets exactly one reply)
//!
//! Run with: `cargo test -p solace-core --test qa_dialogue_flow`

use solace_core::testing::{assert_active, assert_awaiting, assert_inactive, TestHarness};
use solace_core::{CategoryId, FeatureId, ReplySource};

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[test]
fn test_emotional_keywords_reach_their_categories() {
    let mut harness = TestHarness::new();

    let cases = [
        ("hello there", CategoryId::Greeting),
        ("I'm feeling really happy today", CategoryId::Positive),
        ("just another day honestly", CategoryId::NormalDay),
        ("so anxious I can't think", CategoryId::HighStress),
        ("I feel worthless", CategoryId::LowMood),
        ("I'm furious about this", CategoryId::Anger),
        ("give me an affirmation", CategoryId::Affirmation),
        ("motivate me", CategoryId::Motivation),
    ];

    for (input, expected) in cases {
        let reply = harness.say(input);
        assert_eq!(
            reply.source,
            ReplySource::Category(expected),
            "input {input:?} went to {:?}",
            reply.source
        );
        // Decline any offer so the next case starts idle.
        if harness.awaiting_consent() {
            harness.say("no thanks");
        }
    }
}

#[test]
fn test_longer_keyword_outranks_shorter_one() {
    let mut harness = TestHarness::new();
    // "mentally tired" (mild stress) must win over "tired" even though
    // both are present.
    let reply = harness.say("I'm mentally tired after exams");
    assert_eq!(reply.source, ReplySource::Category(CategoryId::MildStress));
}

#[test]
fn test_unmatched_input_gets_the_fallback() {
    let mut harness = TestHarness::new();
    let reply = harness.say("qqq zzz xyzzy");
    assert_eq!(reply.source, ReplySource::Fallback);
    assert!(!reply.text.is_empty());
    assert_inactive(&harness);
}

// =============================================================================
// CONSENT ROUND TRIP
// =============================================================================

#[test]
fn test_offer_accept_run_stop() {
    let mut harness = TestHarness::new();

    harness.say("I'm so stressed out");
    assert_awaiting(&harness, FeatureId::Breathing);

    harness.say("yes please");
    assert_active(&harness, FeatureId::Breathing);

    harness.say("next");
    assert_eq!(harness.feature_step(), 1);

    harness.say("stop");
    assert_inactive(&harness);
}

#[test]
fn test_decline_is_idempotent() {
    let mut harness = TestHarness::new();

    harness.say("I feel so lonely");
    assert_awaiting(&harness, FeatureId::Writing);

    harness.say("no thanks");
    assert_inactive(&harness);

    // A second "no" arrives with nothing pending; it must not crash or
    // resurrect the offer.
    let reply = harness.say("no");
    assert_inactive(&harness);
    assert!(!reply.text.is_empty());
}

#[test]
fn test_ignoring_an_offer_reclassifies_the_input() {
    let mut harness = TestHarness::new();

    harness.say("I'm exhausted");
    assert_awaiting(&harness, FeatureId::Breathing);

    // The user changes topic instead of answering.
    let reply = harness.say("actually I'm furious with my brother");
    assert_eq!(reply.source, ReplySource::Category(CategoryId::Anger));
    // The anger category carries its own offer.
    assert_awaiting(&harness, FeatureId::AngerRelease);
}

#[test]
fn test_consent_yes_beats_no_in_one_reply() {
    let mut harness = TestHarness::new();

    harness.say("feeling drained");
    harness.say("no wait, yes let's try");
    assert_active(&harness, FeatureId::Breathing);
}

// =============================================================================
// WHOLE-CONVERSATION SANITY
// =============================================================================

#[test]
fn test_long_conversation_always_answers() {
    let mut harness = TestHarness::new();
    let script = [
        "hi",
        "pretty normal day",
        "actually I'm overwhelmed",
        "yes",
        "next",
        "there is just so much happening at home right now and I cannot keep up",
        "next",
        "stop",
        "tell me a story",
        "yes",
        "another",
        "that's enough for tonight",
        "thanks",
    ];

    for input in script {
        let reply = harness.say(input);
        assert!(!reply.text.is_empty(), "no reply for {input:?}");
    }
    assert_inactive(&harness);
}

#[test]
fn test_greeting_opens_with_capabilities() {
    let harness = TestHarness::new();
    let greeting = harness.session.greeting();
    assert!(greeting.contains("How are you feeling"));
    assert!(greeting.contains("stories"));
}
