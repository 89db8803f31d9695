//! Static registry of guided features.
//!
//! A feature is a multi-turn therapeutic micro-exercise: a linear step
//! script, a single-turn writing prompt, a story pool, or a riddle game.
//! The table is loaded once and read-only for the process lifetime.
//! Feature declaration order is also the offer-resolution scan order, so
//! overlapping trigger sets resolve the same way every time.

use crate::classify::CategoryId;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a guided feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureId {
    Breathing,
    Writing,
    Grounding,
    Visualization,
    SleepSupport,
    AngerRelease,
    Stories,
    Games,
    Yoga,
    Exercise,
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.definition() {
            Some(def) => write!(f, "{}", def.display_name),
            None => write!(f, "{self:?}"),
        }
    }
}

impl FeatureId {
    /// Look up this feature's definition in the static catalog.
    ///
    /// `None` only for a catalog/table mismatch; callers degrade to the
    /// "I don't know that one" reply rather than panicking.
    pub fn definition(&self) -> Option<&'static FeatureDefinition> {
        FEATURES.iter().find(|f| f.id == *self)
    }

    /// The fixed consent question appended to an offering reply.
    pub fn consent_question(&self) -> &'static str {
        match self {
            FeatureId::Breathing => "Would you like to try a breathing exercise? (Yes / No) 🌬️",
            FeatureId::Writing => "Want to write down your thoughts? It helps. (Yes / No) 📝",
            FeatureId::Grounding => {
                "Shall we do a grounding exercise to feel safe again? (Yes / No) 🌿"
            }
            FeatureId::Visualization => {
                "Want to imagine a peaceful place together? (Yes / No) 🌄"
            }
            FeatureId::SleepSupport => "Feeling sleepy? Want me to help you rest? (Yes / No) 🌙",
            FeatureId::AngerRelease => "Want to release that anger safely? (Yes / No) 🔥",
            FeatureId::Stories => "Want to hear a calming story? (Yes / No) 📖",
            FeatureId::Games => "Want to play a riddle game? (Yes / No) 🎮",
            FeatureId::Yoga => "Want to stretch with some yoga? (Yes / No) 🧘",
            FeatureId::Exercise => "Want to do a quick workout? (Yes / No) 🏃",
        }
    }
}

/// A riddle with its canonical answer.
///
/// Answer acceptance is substring-based, so answers are kept lowercase and
/// multi-character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    pub question: String,
    pub answer: String,
}

impl Riddle {
    fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The behavior a feature drives once active.
#[derive(Debug, Clone)]
pub enum FeatureKind {
    /// Ordered step script; advances one step per continuing turn.
    LinearSteps(Vec<String>),
    /// One prompt, one reflection, one acknowledgment.
    SingleTurnWriting {
        prompt: String,
        acknowledgments: Vec<String>,
    },
    /// Pool of stories replayed on request.
    StoryPool(Vec<String>),
    /// Riddle rounds with guess/give-up/again handling.
    RiddleGame(Vec<Riddle>),
}

/// One entry of the static feature catalog.
#[derive(Debug, Clone)]
pub struct FeatureDefinition {
    pub id: FeatureId,
    pub display_name: &'static str,
    /// Keywords that cause this feature to be offered.
    pub triggers: &'static [&'static str],
    pub kind: FeatureKind,
}

/// Resolve which feature (if any) to offer for a classified keyword.
///
/// Feature triggers are checked first with a bidirectional substring match
/// (either string may contain the other) so small edits to the keyword
/// table don't require exact duplication here. If nothing triggers, the
/// category's implied feature applies; informational categories imply
/// none.
pub fn offer_for(matched_keyword: &str, category: CategoryId) -> Option<FeatureId> {
    let keyword = matched_keyword.to_lowercase();

    for feature in FEATURES.iter() {
        let triggered = feature
            .triggers
            .iter()
            .any(|t| keyword.contains(t) || t.contains(keyword.as_str()));
        if triggered {
            return Some(feature.id);
        }
    }

    crate::classify::category_entry(category).and_then(|c| c.implied_feature)
}

fn steps(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

lazy_static! {
    /// The guided-feature catalog, in offer-scan order.
    pub static ref FEATURES: Vec<FeatureDefinition> = vec![
        FeatureDefinition {
            id: FeatureId::Breathing,
            display_name: "Breathing Exercise",
            triggers: &[
                "tired", "stressed", "anxious", "panicking", "overwhelmed", "can't breathe",
                "heart racing", "pressure", "nervous", "exhausted", "drained", "burnt out",
            ],
            kind: FeatureKind::LinearSteps(steps(&[
                "Let's begin a calming breathing exercise 🌬️\n\nFind a comfortable position and close your eyes if you'd like...",
                "Step 1: Breathe IN slowly through your nose for 4 seconds... 1... 2... 3... 4... 🌸",
                "Step 2: HOLD your breath gently for 4 seconds... 1... 2... 3... 4... ✨",
                "Step 3: Breathe OUT slowly through your mouth for 6 seconds... 1... 2... 3... 4... 5... 6... 🍃",
                "Step 4: HOLD empty for 2 seconds... 1... 2... 💫",
                "Lovely. Let's repeat the cycle once more. Breathe IN... 1... 2... 3... 4... 🌸",
                "HOLD... 1... 2... 3... 4... ✨",
                "Breathe OUT... 1... 2... 3... 4... 5... 6... 🍃",
                "Wonderful 🌿 You've completed the breathing exercise. How do you feel now? Take your time to answer.",
            ])),
        },
        FeatureDefinition {
            id: FeatureId::Writing,
            display_name: "Writing Exercise",
            triggers: &[
                "sad", "lonely", "empty", "hopeless", "depressed", "crying", "worthless",
                "lost", "numb", "feeling alone", "no one understands",
            ],
            kind: FeatureKind::SingleTurnWriting {
                prompt: "Let's try a gentle writing exercise 📝\n\nTake a moment and write down ONE thing you're feeling or thinking right now. It doesn't have to be perfect—just let it out. I'm here to listen without judgment 🤍".to_string(),
                acknowledgments: steps(&[
                    "Thank you for sharing that with me 🤍 Writing it out can lighten the load. Your feelings are valid.",
                    "I hear you 💙 Thank you for trusting me with your thoughts. It's okay to feel this way.",
                    "That took courage to write 🌸 I'm grateful you shared. You're not alone in this.",
                    "Thank you for opening up 🌿 Your words matter, and so do your feelings.",
                    "I appreciate you sharing that 💛 Putting feelings into words can help us process them.",
                ]),
            },
        },
        FeatureDefinition {
            id: FeatureId::Grounding,
            display_name: "Grounding Exercise",
            triggers: &[
                "panic", "panicking", "scared", "losing control", "overwhelmed",
                "breaking down", "can't breathe",
            ],
            kind: FeatureKind::LinearSteps(steps(&[
                "Let's do a grounding exercise to bring you back to the present moment 🌿\n\nThis is called the 5-4-3-2-1 technique...",
                "Step 1: Look around and name 5 things you can SEE 👀\n\n(Take your time, then tell me what you see)",
                "Good. Now name 4 things you can TOUCH or feel right now 🖐️\n\n(The texture of your clothes, the surface you're sitting on...)",
                "Great. Now name 3 things you can HEAR 👂\n\n(Distant sounds, nearby sounds, even your own breathing...)",
                "Wonderful. Now name 2 things you can SMELL 👃\n\n(Or 2 smells you like, if you can't smell anything right now)",
                "Almost there. Finally, name 1 thing you can TASTE 👅\n\n(Or take a sip of water and notice how it feels)",
                "You did it 🌟 The 5-4-3-2-1 grounding exercise is complete. You are HERE, in this moment, and you are SAFE. How do you feel now?",
            ])),
        },
        FeatureDefinition {
            id: FeatureId::Visualization,
            display_name: "Visualization Exercise",
            triggers: &[
                "mentally tired", "need to relax", "exhausted", "drained", "want peace",
                "need calm",
            ],
            kind: FeatureKind::LinearSteps(steps(&[
                "Let's take a peaceful journey in your mind 🌄\n\nClose your eyes and take a deep breath...",
                "Imagine yourself walking on a beautiful, quiet beach 🏖️\n\nThe sand is warm and soft under your feet...",
                "Listen to the gentle waves washing onto the shore 🌊\n\nIn... and out... like your breath...",
                "Feel the warm sunlight on your skin ☀️\n\nA gentle breeze carries away any tension you're holding...",
                "Look around this peaceful place 🌴\n\nThe sky is a soft blue, seabirds call in the distance...",
                "You are completely safe here 🤍\n\nThis is YOUR peaceful place. You can return here anytime you need calm...",
                "Now, slowly, gently, bring your attention back 🌸\n\nWiggle your fingers and toes... take a deep breath... and when you're ready, open your eyes.\n\nHow do you feel?",
            ])),
        },
        FeatureDefinition {
            id: FeatureId::SleepSupport,
            display_name: "Sleep Support",
            triggers: &[
                "can't sleep", "insomnia", "late night", "night thoughts", "want to sleep",
                "need rest", "bed time",
            ],
            kind: FeatureKind::LinearSteps(steps(&[
                "Let's help your mind prepare for rest 🌙\n\nGet into a comfortable position and dim the lights if you can...",
                "Close your eyes and take a slow, deep breath 💤\n\nInhale peace... exhale the day's worries...",
                "Let's do a body scan. Start at your toes 🦶\n\nFeel them relax and become heavy...",
                "Move up to your legs and thighs 🌿\n\nLet all the tension melt away...",
                "Your stomach and chest are soft and relaxed 🌸\n\nYour breathing is slow and calm...",
                "Your shoulders drop... your arms are heavy and warm 💫\n\nTension flows out through your fingertips...",
                "Your face is peaceful... jaw unclenched... eyes soft 😌\n\nYou are safe. You are calm. You are ready for rest...",
                "If thoughts come, let them float by like clouds ☁️\n\nYou don't need to hold onto them tonight...\n\nGoodnight 🌙 Sweet dreams.",
            ])),
        },
        FeatureDefinition {
            id: FeatureId::AngerRelease,
            display_name: "Anger Release Exercise",
            triggers: &[
                "angry", "furious", "rage", "mad", "pissed", "irritated", "frustrated",
                "fed up", "had enough",
            ],
            kind: FeatureKind::LinearSteps(steps(&[
                "I hear that you're feeling intense emotions right now 😤\n\nLet's find a safe way to release some of that energy...",
                "Step 1: Physical release 💪\n\nMake tight fists with both hands. Squeeze as hard as you can for 5 seconds... then RELEASE. Feel the difference.",
                "Step 2: Again 🔥\n\nClench your fists, tense your arms... hold for 5... and RELEASE. Let the tension flow out.",
                "Step 3: Shoulders 🙌\n\nRaise your shoulders up to your ears, hold tight for 5 seconds... and DROP them down.",
                "Step 4: Deep breathing 🌬️\n\nTake a deep breath in through your nose... and exhale STRONGLY through your mouth, like you're blowing the anger out.",
                "Step 5: One more breath 🍃\n\nInhale slowly... and exhale all that heat... let it go...",
                "You've released some of that energy safely 🌿\n\nIt's okay to feel angry—it's a valid emotion. Would you like to talk about what's bothering you?",
            ])),
        },
        FeatureDefinition {
            id: FeatureId::Stories,
            display_name: "Calming Stories",
            triggers: &["story", "stories", "tale"],
            kind: FeatureKind::StoryPool(steps(&[
                "Once, there was a quiet little seed buried deep in the earth 🌰 It felt dark and lonely, but it waited patiently. One day a gentle rain fell 🌧️ and the seed felt a spark of life. Slowly it pushed up through the soil, reaching for the warmth of the sun ☀️ It grew into a strong, beautiful tree, giving shade and shelter to all who came near. Just like the seed, you too are growing, even when it feels dark.",
                "Imagine a small paper boat floating down a gentle stream ⛵ The water carries it effortlessly, around smooth stones and under leafy branches. The boat doesn't worry about where it's going; it trusts the flow. It glides peacefully, rocking softly with the ripples. You can be like that boat—trusting, floating, and safe in the flow of life.",
                "High up in the mountains there is a silent lake 🏔️ The water is so still it looks like a mirror, reflecting the blue sky and drifting clouds. No matter how hard the wind blows, the deep water stays calm and undisturbed. Within you there is also a place of deep stillness, a quiet lake where you can always find peace.",
            ])),
        },
        FeatureDefinition {
            id: FeatureId::Games,
            display_name: "Mindful Riddles",
            triggers: &["game", "riddle", "play", "bored"],
            kind: FeatureKind::RiddleGame(vec![
                Riddle::new(
                    "I have keys but no locks. I have a space but no room. You can enter, but never go outside. What am I? 🎹",
                    "keyboard",
                ),
                Riddle::new(
                    "The more of me you take, the more you leave behind. What am I? 👣",
                    "footsteps",
                ),
                Riddle::new(
                    "I speak without a mouth and hear without ears. I have no body, but I come alive with wind. What am I? 🌬️",
                    "echo",
                ),
                Riddle::new(
                    "I am always hungry, I must always be fed. The finger I touch will soon turn red. What am I? 🔥",
                    "fire",
                ),
                Riddle::new(
                    "I'm tall when I'm young and short when I'm old. What am I? 🕯️",
                    "candle",
                ),
            ]),
        },
        FeatureDefinition {
            id: FeatureId::Yoga,
            display_name: "Yoga Session",
            triggers: &["yoga", "stretch", "flexible", "body"],
            kind: FeatureKind::LinearSteps(steps(&[
                "Let's stretch together 🧘\n\nFind a comfy spot on the floor...",
                "Step 1: Mountain Pose 🏔️\nStand tall, feet together, shoulders back. Breathe deep...",
                "Step 2: Tree Pose 🌳\nLift one foot and place it against your other leg. Find your balance...",
                "Step 3: Cat-Cow 🐈\nOn hands and knees... look up on the inhale, round your back on the exhale...",
                "Step 4: Child's Pose 👶\nSit back on your heels and stretch gently forward... relax...",
                "Great job 🌿 Your body thanks you for the stretch. How do you feel?",
            ])),
        },
        FeatureDefinition {
            id: FeatureId::Exercise,
            display_name: "Quick Workout",
            triggers: &["exercise", "workout", "gym", "fitness", "move"],
            kind: FeatureKind::LinearSteps(steps(&[
                "Time to get moving ⚡ Let's wake up some energy!",
                "Step 1: 10 jumping jacks 🌟\nJump up! Count to 10 at your own pace.",
                "Step 2: High knees 🦵\nMarch in place, knees high! 1, 2, 1, 2...",
                "Step 3: Arm circles 🙆\nSpin your arms forward... now backward... feel the warmth.",
                "Step 4: Deep squats 🏋️\nDown... and up! Strong, steady legs.",
                "You did it 💪 How's your energy now?",
            ])),
        },
    ];
}
