//! Yes/no resolution for feature offers.
//!
//! Only consulted while an offer is pending. Matching is substring-based
//! over the lower-cased input; when both a yes- and a no-keyword appear,
//! yes wins (the yes check runs first, matching the original behavior).

use crate::picker;
use rand::Rng;

/// Keywords accepted as consent.
pub const YES_KEYWORDS: &[&str] = &[
    "yes",
    "yeah",
    "yep",
    "sure",
    "okay",
    "ok",
    "yea",
    "yup",
    "please",
    "i'd like that",
    "let's do it",
    "sounds good",
    "alright",
    "yes please",
    "go ahead",
    "i want to",
    "haan",
    "theek hai",
    "chalo",
];

/// Keywords accepted as a decline.
pub const NO_KEYWORDS: &[&str] = &[
    "no",
    "nope",
    "nah",
    "not now",
    "maybe later",
    "skip",
    "no thanks",
    "not really",
    "i'm fine",
    "nahin",
    "nahi",
    "rehne do",
];

const DECLINE_REPLIES: &[&str] = &[
    "That's okay 🌿 I'm here if you need me.",
    "No problem 💙 What else is on your mind?",
    "Okay! I'm listening... 🌸",
    "Understood 💛 We can just talk.",
    "Alright! Let me know if you need anything else ✨",
];

/// Outcome of checking a reply against the consent keyword sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentSignal {
    Yes,
    No,
    /// Neither set matched; the input is treated as a fresh utterance.
    Unresolved,
}

/// Resolve a reply to a pending offer.
pub fn resolve(input: &str) -> ConsentSignal {
    let clean = input.trim().to_lowercase();

    if YES_KEYWORDS.iter().any(|k| clean.contains(k)) {
        ConsentSignal::Yes
    } else if NO_KEYWORDS.iter().any(|k| clean.contains(k)) {
        ConsentSignal::No
    } else {
        ConsentSignal::Unresolved
    }
}

/// A random acknowledgment for a declined offer.
pub fn decline_reply_with_rng<R: Rng>(rng: &mut R) -> String {
    picker::pick_with_rng(DECLINE_REPLIES, rng)
        .map(|s| s.to_string())
        .unwrap_or_else(|| DECLINE_REPLIES[0].to_string())
}
