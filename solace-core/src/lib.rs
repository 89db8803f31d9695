//! Dialogue engine for a text-first wellness companion.
//!
//! This crate provides:
//! - Keyword intent classification with longest-match tie-breaking
//! - A consent-gated catalog of guided self-care features
//! - A step-at-a-time feature runner (breathing, grounding, riddles, ...)
//! - A life-architect command router for lists and planning
//! - Versioned JSON profile persistence
//!
//! # Quick Start
//!
//! ```
//! use solace_core::{ChatSession, SessionConfig};
//!
//! let mut session = ChatSession::new(SessionConfig::new().with_seed(42));
//! println!("{}", session.greeting());
//!
//! let reply = session.handle_turn("I'm feeling really tired");
//! println!("{}", reply.text);
//!
//! // The session offered an exercise; accept it.
//! let reply = session.handle_turn("yes");
//! println!("{}", reply.text);
//! ```

pub mod architect;
pub mod catalog;
pub mod classify;
pub mod consent;
pub mod picker;
pub mod responses;
pub mod runner;
pub mod session;
pub mod speech;
pub mod store;
pub mod testing;

// Primary public API
pub use architect::ArchitectState;
pub use catalog::{FeatureDefinition, FeatureId, FeatureKind, Riddle};
pub use classify::{classify, CategoryId, KeywordMatch};
pub use consent::ConsentSignal;
pub use session::{ChatSession, ConversationState, Reply, ReplySource, SessionConfig};
pub use speech::{normalize_for_speech, NullSpeech, NullTranscript, SpeechOutput, Transcript};
pub use store::{SavedProfile, StoreError, UserId};
pub use testing::TestHarness;
