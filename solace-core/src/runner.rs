//! The per-feature state machine.
//!
//! `activate` produces a feature's first reply; `advance` handles every
//! later turn while the feature is active. A stop keyword ends any feature
//! at any point, and termination always resets the offer/feature/riddle
//! fields together so a new utterance finds the machine fully inactive.

use crate::catalog::{FeatureId, FeatureKind, Riddle};
use crate::consent::YES_KEYWORDS;
use crate::picker;
use crate::session::ConversationState;
use rand::Rng;

/// Keywords that end an active feature immediately.
pub const STOP_KEYWORDS: &[&str] = &["stop", "exit", "quit", "end"];

/// Keywords that advance a linear feature to its next step.
pub const CONTINUE_KEYWORDS: &[&str] = &[
    "next", "continue", "okay", "ok", "done", "ready", "go", "yes", "proceed",
];

/// Inputs shorter than this implicitly continue a linear feature, so brief
/// affirmations like "mm" or "k" don't stall the script. Short negative
/// replies without a stop keyword also advance; known limitation.
pub const SHORT_INPUT_CONTINUE_LEN: usize = 30;

const GIVE_UP_PHRASES: &[&str] = &["give up", "dunno", "tell me"];

const STOP_REPLY: &str = "Stopped. I'm here whenever you need me 🌿";

/// Degraded reply for a feature reference the catalog can't resolve.
pub const UNKNOWN_FEATURE_REPLY: &str =
    "Hmm, I don't know that one yet. Let's just talk 🌿";

const FIRST_STEP_HINT: &str = "\n\n(Say 'next' or 'continue' when ready, or 'stop' to end)";
const STEP_HINT: &str = "\n\n(Say 'next' when ready, or 'stop' to end)";
const VENTING_FILLER: &str = "I hear you 🌿 ";

/// Activate a feature and return its first reply.
///
/// Sets `active_feature`, resets `feature_step`, and for the riddle game
/// deals and stores the first riddle.
pub fn activate<R: Rng>(id: FeatureId, state: &mut ConversationState, rng: &mut R) -> String {
    let Some(def) = id.definition() else {
        state.reset_feature();
        return UNKNOWN_FEATURE_REPLY.to_string();
    };

    state.active_feature = Some(id);
    state.feature_step = 0;
    state.active_riddle = None;

    match &def.kind {
        FeatureKind::LinearSteps(steps) => match steps.first() {
            Some(first) => format!("{first}{FIRST_STEP_HINT}"),
            None => finish(state, STOP_REPLY.to_string()),
        },
        FeatureKind::SingleTurnWriting { prompt, .. } => prompt.clone(),
        FeatureKind::StoryPool(stories) => match picker::pick_with_rng(stories, rng) {
            Some(story) => format!(
                "{story}\n\nI hope that brought you a moment of peace 🌿 Would you like another one?"
            ),
            None => finish(state, STOP_REPLY.to_string()),
        },
        FeatureKind::RiddleGame(riddles) => match picker::pick_with_rng(riddles, rng) {
            Some(riddle) => {
                state.active_riddle = Some(riddle.clone());
                format!(
                    "Here is your riddle:\n\n{}\n\n(Guess it, or say 'give up')",
                    riddle.question
                )
            }
            None => finish(state, STOP_REPLY.to_string()),
        },
    }
}

/// Handle one turn of an active feature. Always returns a reply.
pub fn advance<R: Rng>(
    id: FeatureId,
    input: &str,
    state: &mut ConversationState,
    rng: &mut R,
) -> String {
    let clean = input.trim().to_lowercase();

    // Stop is universal, checked before any per-kind handling.
    if STOP_KEYWORDS.iter().any(|k| clean.contains(k)) {
        return finish(state, STOP_REPLY.to_string());
    }

    let Some(def) = id.definition() else {
        return finish(state, UNKNOWN_FEATURE_REPLY.to_string());
    };

    match &def.kind {
        FeatureKind::LinearSteps(steps) => advance_linear(steps, &clean, state),
        FeatureKind::SingleTurnWriting { acknowledgments, .. } => {
            let ack = picker::pick_with_rng(acknowledgments, rng)
                .cloned()
                .unwrap_or_default();
            finish(
                state,
                format!("{ack}\n\nIs there anything else you'd like to share or talk about?"),
            )
        }
        FeatureKind::StoryPool(stories) => {
            let wants_more = ["yes", "another", "more"].iter().any(|k| clean.contains(k));
            if wants_more {
                match picker::pick_with_rng(stories, rng) {
                    Some(story) => format!("{story}\n\n(Say 'stop' when you're done listening)"),
                    None => finish(state, STOP_REPLY.to_string()),
                }
            } else {
                finish(
                    state,
                    "I'm glad you listened. How do you feel now? 🌸".to_string(),
                )
            }
        }
        FeatureKind::RiddleGame(riddles) => advance_riddles(riddles, &clean, state, rng),
    }
}

fn advance_linear(steps: &[String], clean: &str, state: &mut ConversationState) -> String {
    if steps.is_empty() {
        return finish(state, STOP_REPLY.to_string());
    }
    let last = steps.len() - 1;

    let wants_continue = CONTINUE_KEYWORDS.iter().any(|k| clean.contains(k))
        || clean.chars().count() < SHORT_INPUT_CONTINUE_LEN;

    if wants_continue {
        state.feature_step += 1;
        if state.feature_step >= last {
            // The closing step terminates on the same turn it is emitted.
            return finish(state, steps[last].clone());
        }
        format!("{}{STEP_HINT}", steps[state.feature_step])
    } else {
        // Long input without a continue keyword: the user is venting, not
        // navigating. Acknowledge and repeat the current step.
        let current = steps.get(state.feature_step).cloned().unwrap_or_default();
        format!("{VENTING_FILLER}{current}{STEP_HINT}")
    }
}

fn advance_riddles<R: Rng>(
    riddles: &[Riddle],
    clean: &str,
    state: &mut ConversationState,
    rng: &mut R,
) -> String {
    match state.active_riddle.take() {
        Some(riddle) => {
            if GIVE_UP_PHRASES.iter().any(|p| clean.contains(p)) {
                format!(
                    "The answer was: {} 🌟\n\nWould you like another riddle? (Yes / No)",
                    riddle.answer
                )
            } else if clean.contains(riddle.answer.as_str()) {
                format!(
                    "Correct! 🎉 The answer is {}.\n\nWant another riddle? (Yes / No)",
                    riddle.answer
                )
            } else {
                // Wrong guess: same riddle stays live.
                state.active_riddle = Some(riddle);
                "Not quite! 🧐 Try again, or say 'give up'.".to_string()
            }
        }
        None => {
            // Between rounds: yes deals again, anything else wraps up.
            if YES_KEYWORDS.iter().any(|k| clean.contains(k)) {
                match picker::pick_with_rng(riddles, rng) {
                    Some(riddle) => {
                        state.active_riddle = Some(riddle.clone());
                        format!("Here's the next one:\n\n{}", riddle.question)
                    }
                    None => finish(state, STOP_REPLY.to_string()),
                }
            } else {
                finish(
                    state,
                    "That was fun! 🎮 Let's play again sometime.".to_string(),
                )
            }
        }
    }
}

/// Terminate the active feature, resetting all four state fields together.
fn finish(state: &mut ConversationState, reply: String) -> String {
    state.reset_feature();
    reply
}
