//! Keyword classification of free-text input into topical categories.
//!
//! Matching is deliberately simple: lower-case the input, test every
//! registered keyword by substring containment, and let the longest
//! matching keyword across all categories win. Longest-match-first is what
//! disambiguates overlapping keyword sets ("mentally tired" vs "tired"),
//! so it must not be weakened to a per-category scan.

use crate::catalog::FeatureId;
use crate::picker;
use crate::responses::CATEGORIES;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Topical buckets of keywords sharing a reply pool.
///
/// Declaration order is the tie-break order for equal-length keyword
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryId {
    Menu,
    Greeting,
    Positive,
    NormalDay,
    MildStress,
    HighStress,
    LowMood,
    Anger,
    Sleep,
    Affirmation,
    Motivation,
    Story,
    Game,
    Yoga,
    Exercise,
    Help,
}

/// How a category produces its reply.
#[derive(Debug, Clone)]
pub enum ReplySet {
    /// A pool of interchangeable replies; one is picked at random.
    Pool(Vec<String>),
    /// Replies keyed by the matched keyword, with a required default.
    Keyed {
        entries: Vec<(String, String)>,
        default: String,
    },
}

impl ReplySet {
    /// Select a reply for the matched keyword.
    pub fn select<R: Rng>(&self, keyword: &str, rng: &mut R) -> String {
        match self {
            ReplySet::Pool(pool) => picker::pick_with_rng(pool, rng)
                .cloned()
                .unwrap_or_default(),
            ReplySet::Keyed { entries, default } => entries
                .iter()
                .find(|(k, _)| k == keyword)
                .map(|(_, reply)| reply.clone())
                .unwrap_or_else(|| default.clone()),
        }
    }
}

/// One entry of the static classifier table.
#[derive(Debug, Clone)]
pub struct IntentCategory {
    pub id: CategoryId,
    pub keywords: Vec<String>,
    pub replies: ReplySet,
    /// Feature offered when no per-keyword feature trigger fires.
    pub implied_feature: Option<FeatureId>,
}

/// A successful classification: the category and the keyword that won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub category: CategoryId,
    pub keyword: String,
}

/// Classify free-text input against the static category table.
///
/// Returns `None` when no keyword matches; the caller applies the fixed
/// fallback reply.
pub fn classify(input: &str) -> Option<KeywordMatch> {
    let clean = input.trim().to_lowercase();
    if clean.is_empty() {
        return None;
    }

    let mut best: Option<KeywordMatch> = None;
    let mut best_len = 0usize;

    for category in CATEGORIES.iter() {
        for keyword in &category.keywords {
            // Strictly-greater keeps declaration order as the tie-break.
            if keyword.chars().count() > best_len && clean.contains(keyword.as_str()) {
                best_len = keyword.chars().count();
                best = Some(KeywordMatch {
                    category: category.id,
                    keyword: keyword.clone(),
                });
            }
        }
    }

    best
}

/// Look up a category's table entry.
pub fn category_entry(id: CategoryId) -> Option<&'static IntentCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}
