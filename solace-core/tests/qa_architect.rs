//! QA tests for the life-architect command router inside a live session.
//!
//! Commands must short-circuit the emotional dialogue path, mutate the
//! right list, and leave the conversation state untouched.
//!
//! Run with: `cargo test -p solace-core --test qa_architect`

use solace_core::testing::{assert_inactive, TestHarness};
use solace_core::ReplySource;

#[test]
fn test_commands_bypass_the_dialogue_path() {
    let mut harness = TestHarness::new();
    let reply = harness.say("Add learn the violin to my bucket list");
    assert_eq!(reply.source, ReplySource::Architect);
    assert_inactive(&harness);
    assert_eq!(harness.session.architect().tasks.len(), 1);
}

#[test]
fn test_commands_do_not_disturb_a_pending_offer() {
    let mut harness = TestHarness::new();
    harness.say("I'm exhausted");
    assert!(harness.awaiting_consent());

    // A planner command mid-offer is handled, and the offer survives.
    let reply = harness.say("Put lunch with Mira on my schedule");
    assert_eq!(reply.source, ReplySource::Architect);
    assert!(harness.awaiting_consent());

    // The offer can still be accepted afterwards.
    harness.say("yes");
    assert!(harness.active_feature().is_some());
}

#[test]
fn test_all_lists_accumulate_and_show_on_dashboard() {
    let mut harness = TestHarness::new();
    harness.say("Add swim in the sea to my bucket list");
    harness.say("Put morning review on my schedule");
    harness.say("Add stretch daily to habits");
    harness.say("Save idea rooftop garden");
    harness.say("Book physio at 4pm");

    let dashboard = harness.say("dashboard").text;
    for item in [
        "swim in the sea",
        "morning review",
        "stretch daily",
        "rooftop garden",
        "physio at 4pm",
    ] {
        assert!(dashboard.contains(item), "dashboard missing {item:?}");
    }
}

#[test]
fn test_task_manager_listing() {
    let mut harness = TestHarness::new();
    let empty = harness.say("task manager").text;
    assert!(empty.contains("empty"));

    harness.say("Add visit the mountains to my bucket list");
    let listing = harness.say("show tasks").text;
    assert!(listing.contains("visit the mountains"));
}

#[test]
fn test_history_is_kept_for_architect_and_dialogue_turns() {
    let mut harness = TestHarness::new();
    harness.say("hello");
    harness.say("Save idea learn woodworking");

    let history = &harness.session.architect().history;
    assert_eq!(history.len(), 4);
    assert!(history[0].contains("You: hello"));
    assert!(history[2].contains("You: Save idea learn woodworking"));
    assert!(history[3].contains("Bot: "));
}

#[test]
fn test_healing_overview_reroutes_to_dialogue_features() {
    let mut harness = TestHarness::new();
    let reply = harness.say("help me with my mental health");
    assert_eq!(reply.source, ReplySource::Architect);
    assert!(reply.text.contains("Breathing"));

    // Following its suggestion lands back on the dialogue path.
    let reply = harness.say("I'm feeling anxious");
    assert!(matches!(reply.source, ReplySource::Category(_)));
}
