//! ChatSession - the primary public API for the companion dialogue.
//!
//! One session owns one `ConversationState` and processes one utterance at
//! a time to completion: command router first, then the consent gate, the
//! active feature, keyword classification, and finally the fixed fallback.
//! Every turn produces exactly one reply; nothing here performs I/O.

use crate::architect::{self, ArchitectState};
use crate::catalog::{self, FeatureId, Riddle};
use crate::classify::{self, CategoryId};
use crate::consent::{self, ConsentSignal};
use crate::responses::FALLBACK_REPLY;
use crate::runner;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// The mutable per-session dialogue record.
///
/// `awaiting_consent` and `active_feature` are never both meaningful at
/// once: consent precedes activation, and every termination path clears
/// all four fields together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    /// Feature proposed and pending a yes/no, cleared on resolution.
    pub last_offered: Option<FeatureId>,
    /// True between an offer and its resolution.
    pub awaiting_consent: bool,
    /// Feature currently in progress.
    pub active_feature: Option<FeatureId>,
    /// Index into the active feature's step sequence.
    pub feature_step: usize,
    /// Riddle awaiting a guess; only meaningful for the riddle game.
    pub active_riddle: Option<Riddle>,
}

impl ConversationState {
    /// Atomic reset back to the inactive resting state.
    pub fn reset_feature(&mut self) {
        self.active_feature = None;
        self.feature_step = 0;
        self.last_offered = None;
        self.active_riddle = None;
    }

    /// Whether the session is in its inactive resting state.
    pub fn is_idle(&self) -> bool {
        !self.awaiting_consent && self.active_feature.is_none()
    }
}

/// Configuration for creating a chat session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Seed for the reply/story/riddle RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Name used in the startup greeting, when known.
    pub user_name: Option<String>,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed RNG seed so replies are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the user's name for the greeting.
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }
}

/// Where a reply came from, for frontends and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Handled by the life-architect command router.
    Architect,
    /// A resolved (declined) feature offer.
    Consent,
    /// An active feature's runner.
    Feature,
    /// Keyword classification.
    Category(CategoryId),
    /// Nothing matched.
    Fallback,
}

/// One turn's output.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

/// A companion chat session.
///
/// This is the main entry point: it wires the command router, consent
/// gate, feature runner, and classifier into the single-turn contract.
pub struct ChatSession {
    state: ConversationState,
    architect: ArchitectState,
    rng: StdRng,
    user_name: Option<String>,
}

impl ChatSession {
    /// Create a new session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: ConversationState::default(),
            architect: ArchitectState::default(),
            rng,
            user_name: config.user_name,
        }
    }

    /// Resume a session from previously captured state.
    ///
    /// A stale `active_feature` in the snapshot degrades on the next turn
    /// rather than failing here.
    pub fn with_state(
        config: SessionConfig,
        state: ConversationState,
        architect: ArchitectState,
    ) -> Self {
        let mut session = Self::new(config);
        session.state = state;
        session.architect = architect;
        session
    }

    /// The startup greeting and capability menu, for frontends to open the
    /// transcript with.
    pub fn greeting(&self) -> String {
        let hello = match &self.user_name {
            Some(name) => format!("Hello, {name}! 👋 How are you feeling today? ✨"),
            None => "Hello! 👋 How are you feeling today? ✨".to_string(),
        };
        format!(
            "{hello}\n\nHere is what we can do together:\n\n\
             1. 🗣️ Chat with me\n\
             2. 📖 Listen to stories\n\
             3. 🎮 Play games\n\
             4. 🧘 Do yoga\n\
             5. 🏃 Exercise\n\
             6. 🌬️ Breathing exercises\n\
             7. 🌿 Grounding\n\
             8. ✍️ Journaling\n\n\
             Just type what you want!"
        )
    }

    /// Process one user utterance and produce exactly one reply.
    pub fn handle_turn(&mut self, input: &str) -> Reply {
        self.architect.record_history("You", input);
        let reply = self.route_turn(input);
        self.architect.record_history("Bot", &reply.text);
        reply
    }

    fn route_turn(&mut self, input: &str) -> Reply {
        // Side-channel commands short-circuit the emotional path.
        if let Some(text) = architect::route(input, &mut self.architect) {
            return Reply {
                text,
                source: ReplySource::Architect,
            };
        }
        self.dialogue_turn(input)
    }

    fn dialogue_turn(&mut self, input: &str) -> Reply {
        if self.state.awaiting_consent {
            match consent::resolve(input) {
                ConsentSignal::Yes => {
                    self.state.awaiting_consent = false;
                    let text = match self.state.last_offered.take() {
                        Some(id) => runner::activate(id, &mut self.state, &mut self.rng),
                        None => {
                            // Stale offer; degrade instead of raising.
                            self.state.reset_feature();
                            runner::UNKNOWN_FEATURE_REPLY.to_string()
                        }
                    };
                    return Reply {
                        text,
                        source: ReplySource::Feature,
                    };
                }
                ConsentSignal::No => {
                    self.state.awaiting_consent = false;
                    self.state.last_offered = None;
                    return Reply {
                        text: consent::decline_reply_with_rng(&mut self.rng),
                        source: ReplySource::Consent,
                    };
                }
                // The user ignored the offer; treat the input as fresh.
                ConsentSignal::Unresolved => {}
            }
        }

        if let Some(id) = self.state.active_feature {
            return Reply {
                text: runner::advance(id, input, &mut self.state, &mut self.rng),
                source: ReplySource::Feature,
            };
        }

        if let Some(m) = classify::classify(input) {
            let mut text = match classify::category_entry(m.category) {
                Some(entry) => entry.replies.select(&m.keyword, &mut self.rng),
                None => FALLBACK_REPLY.to_string(),
            };
            if let Some(offer) = catalog::offer_for(&m.keyword, m.category) {
                self.state.awaiting_consent = true;
                self.state.last_offered = Some(offer);
                text = format!("{text}\n\n{}", offer.consent_question());
            }
            return Reply {
                text,
                source: ReplySource::Category(m.category),
            };
        }

        Reply {
            text: FALLBACK_REPLY.to_string(),
            source: ReplySource::Fallback,
        }
    }

    /// Get a reference to the conversation state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Get a reference to the life-architect state.
    pub fn architect(&self) -> &ArchitectState {
        &self.architect
    }

    /// Get a mutable reference to the life-architect state.
    ///
    /// Use with caution - direct modifications bypass the command grammar.
    pub fn architect_mut(&mut self) -> &mut ArchitectState {
        &mut self.architect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ChatSession {
        ChatSession::new(SessionConfig::new().with_seed(42))
    }

    #[test]
    fn test_session_config_builder() {
        let config = SessionConfig::new().with_seed(7).with_user_name("Asha");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.user_name.as_deref(), Some("Asha"));
    }

    #[test]
    fn test_fallback_totality() {
        let mut session = session();
        let reply = session.handle_turn("qwerty asdf zxcv");
        assert_eq!(reply.text, FALLBACK_REPLY);
        assert_eq!(reply.source, ReplySource::Fallback);
        assert!(session.state().is_idle());
    }

    #[test]
    fn test_offer_sets_consent_state() {
        let mut session = session();
        let reply = session.handle_turn("I'm so tired");
        assert!(session.state().awaiting_consent);
        assert_eq!(session.state().last_offered, Some(FeatureId::Breathing));
        assert!(reply.text.contains("(Yes / No)"));
    }

    #[test]
    fn test_consent_yes_activates_offered_feature() {
        let mut session = session();
        session.handle_turn("I'm so tired");
        let reply = session.handle_turn("sure");
        assert_eq!(session.state().active_feature, Some(FeatureId::Breathing));
        assert_eq!(session.state().feature_step, 0);
        assert!(reply.text.starts_with("Let's begin a calming breathing exercise"));
        assert!(!session.state().awaiting_consent);
    }

    #[test]
    fn test_consent_no_clears_offer_without_activation() {
        let mut session = session();
        session.handle_turn("I'm so tired");
        let reply = session.handle_turn("no thanks");
        assert!(session.state().is_idle());
        assert_eq!(session.state().last_offered, None);
        assert_eq!(reply.source, ReplySource::Consent);
    }

    #[test]
    fn test_unresolved_consent_falls_through_to_classification() {
        let mut session = session();
        session.handle_turn("I'm so tired");
        // Ignores the offer entirely; classified as a fresh utterance.
        let reply = session.handle_turn("my mood is hopeless honestly");
        assert_eq!(reply.source, ReplySource::Category(CategoryId::LowMood));
    }

    #[test]
    fn test_informational_category_has_no_offer() {
        let mut session = session();
        let reply = session.handle_turn("give me an affirmation");
        assert_eq!(reply.source, ReplySource::Category(CategoryId::Affirmation));
        assert!(session.state().is_idle());
        assert!(!reply.text.contains("(Yes / No)"));
    }

    #[test]
    fn test_one_turn_one_nonempty_reply() {
        let mut session = session();
        for input in [
            "hello",
            "tired",
            "yes",
            "next",
            "stop",
            "",
            "🙂",
            "no",
            "tell me a story",
        ] {
            let reply = session.handle_turn(input);
            assert!(!reply.text.is_empty(), "empty reply for {input:?}");
        }
    }

    #[test]
    fn test_greeting_mentions_the_menu() {
        let session = ChatSession::new(SessionConfig::new().with_user_name("Ravi"));
        let greeting = session.greeting();
        assert!(greeting.contains("Ravi"));
        assert!(greeting.contains("Breathing exercises"));
    }

    #[test]
    fn test_history_records_both_sides() {
        let mut session = session();
        session.handle_turn("hello");
        let history = &session.architect().history;
        assert_eq!(history.len(), 2);
        assert!(history[0].contains("You: hello"));
        assert!(history[1].contains("Bot: "));
    }

    #[test]
    fn test_stale_offer_degrades() {
        let session = session();
        let mut state = ConversationState::default();
        state.awaiting_consent = true;
        state.last_offered = None; // inconsistent snapshot
        let mut session2 = ChatSession::with_state(
            SessionConfig::new().with_seed(1),
            state,
            session.architect().clone(),
        );
        let reply = session2.handle_turn("yes");
        assert_eq!(reply.text, runner::UNKNOWN_FEATURE_REPLY);
        assert!(session2.state().is_idle());
    }
}
