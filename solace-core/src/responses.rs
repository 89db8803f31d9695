//! Static intent-category table and fallback reply.
//!
//! Declaration order matters: it is the tie-break order for equal-length
//! keyword matches and must stay stable. Pool categories pick a random
//! reply; keyed categories look the matched keyword up and fall back to
//! their default entry.

use crate::catalog::FeatureId;
use crate::classify::{CategoryId, IntentCategory, ReplySet};
use lazy_static::lazy_static;

/// Reply used when no category matches and no feature is active.
pub const FALLBACK_REPLY: &str = "I'm listening... 🌿 Whatever is on your mind, you can tell me.";

fn kw(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn pool(replies: &[&str]) -> ReplySet {
    ReplySet::Pool(replies.iter().map(|r| r.to_string()).collect())
}

fn keyed(entries: &[(&str, &str)], default: &str) -> ReplySet {
    ReplySet::Keyed {
        entries: entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        default: default.to_string(),
    }
}

lazy_static! {
    /// The classifier table, in declaration (tie-break) order.
    pub static ref CATEGORIES: Vec<IntentCategory> = vec![
        IntentCategory {
            id: CategoryId::Menu,
            keywords: kw(&[
                "menu", "what can you do", "show options", "options", "features",
                "capabilities", "help me", "what do you do",
            ]),
            replies: pool(&[
                "Here's what we can do together ⚡\n\n1. 🧘 Yoga (say 'yoga')\n2. 🏃 Exercise (say 'exercise')\n3. 🌬️ Breathing (say 'breathe')\n4. 🎮 Games (say 'play a game')\n5. 📖 Stories (say 'story')\n6. 🌿 Grounding (say 'grounding')\n7. ✍️ Journaling (say 'writing')\n8. 🛌 Sleep help (say 'sleep')\n\nWhat would you like to try? ✨",
                "Look at all these options 🌟\n\n- Yoga 🧘\n- Quick workout 🏃\n- Breathing exercises 🌬️\n- Riddles 🎮\n- Calming stories 📖\n\nJust tell me what you'd like!",
            ]),
            implied_feature: None,
        },
        IntentCategory {
            id: CategoryId::Greeting,
            keywords: kw(&[
                "hi", "hello", "hey", "namaste", "good morning", "good afternoon",
                "good evening", "yo", "hola", "hello there", "hey buddy", "hey there",
                "hi buddy", "just checking in", "came to talk", "here again", "back again",
                "first time here", "new here", "kaise ho", "kya haal hai", "vanakkam",
            ]),
            replies: pool(&[
                "Hello! 🌱 How are you feeling right now?",
                "I'm so glad you're here ✨ How are you feeling today?",
                "Hi there 😊 Take a breath... how is your mood?",
                "Namaste 🙏 Let's check in with your heart. How do you feel?",
                "Hey! 🌸 Before anything else, tell me—how are you?",
                "Welcome back 💙 What's on your mind?",
                "Good to see you 🙂 How has your day been?",
                "Hello again 🌿 Want to share how you're feeling?",
                "Hi! 🌼 Let's start gently. How are you doing?",
                "Hey there 🤍 I'm listening. What's going on?",
                "Welcome 🌱 No rush... how are you feeling?",
                "Hello ☀️ Starting fresh? Tell me how you feel!",
            ]),
            implied_feature: None,
        },
        IntentCategory {
            id: CategoryId::Positive,
            keywords: kw(&[
                "happy", "good", "great", "awesome", "fantastic", "calm", "relaxed",
                "peaceful", "content", "fine", "all good", "feeling nice", "energetic",
                "motivated", "fresh", "positive", "excited", "hopeful", "feels good",
                "doing well", "balanced", "cheerful", "smiling", "in a good mood",
                "feeling better", "mind is calm", "everything fine", "doing okay",
            ]),
            replies: pool(&[
                "That's wonderful! 😊 What shall we do next?",
                "Yay! That makes me happy too ✨ Want to do something fun?",
                "I'm glad you're good 🌸 Want to keep this vibe going?",
                "Love that energy ⚡ What do you want to explore?",
                "It's great that you're calm 🌿 Want to stay relaxed?",
                "Nice 🙂 Want to reflect on this good feeling?",
                "Feeling good is precious 🌼 Want to build on it?",
                "That's a healthy headspace 🌱 Shall we do something light?",
                "I'm happy to hear that 💙 Want to lock in this mood?",
                "That sounds peaceful 🌊 Enjoy the calm!",
                "Great! 🌞 What should we focus on next?",
                "That's a nice place to be 💫 How shall we continue?",
            ]),
            implied_feature: None,
        },
        IntentCategory {
            id: CategoryId::NormalDay,
            keywords: kw(&[
                "normal", "same as usual", "nothing special", "just another day",
                "routine", "average", "okay okay", "life goes on", "usual stuff",
                "daily work", "regular day", "office", "college", "class", "school",
                "homework", "assignments", "busy day", "free today", "no plans",
                "nothing much", "not much", "as usual", "same old", "just normal",
            ]),
            replies: pool(&[
                "Got it 🙂 Want to relax a little?",
                "Just a regular day? Want to pause for a second?",
                "Sounds like an average day 🌿 Need a break?",
                "That's okay—normal days are good too 😊",
                "A usual day... 🌸 Interested in a quick activity?",
                "Nothing special is still something 🙂 Want to check in?",
                "Sounds steady 🙂 Want to keep it easy?",
                "Fair enough 🌿 Want a gentle activity?",
                "Just another day—shall we make it lighter?",
                "Thanks for sharing 🙂 What next?",
                "Normal and steady 🌱 Want a small reset?",
                "All good 🙂 I'm here if you want to talk.",
            ]),
            implied_feature: None,
        },
        IntentCategory {
            id: CategoryId::MildStress,
            keywords: kw(&[
                "tired", "sleepy", "exhausted", "drained", "overthinking", "busy",
                "too much work", "pressure", "headache", "lazy", "burnt out",
                "mentally tired", "low energy", "feeling heavy", "confused", "restless",
            ]),
            replies: keyed(
                &[
                    ("tired", "Tired? 😌 Close your eyes for a moment... and breathe."),
                    ("sleepy", "Sleepy? 💤 Stretch your arms, or sip some water ✨"),
                    ("exhausted", "Exhausted? 🌿 Lie back if you can... let your body rest."),
                    ("drained", "You seem drained 🪷 Let's breathe together for a few minutes."),
                    ("overthinking", "Overthinking? 🌀 Pause. Breathe in... and out..."),
                    ("busy", "Busy busy? ⏳ Take a break—stretch, look out a window."),
                    ("too much work", "Work overload? 😓 Step back. Close your eyes. Breathe."),
                    ("pressure", "Pressure? 🌿 Try box breathing: 4 in, 4 hold, 4 out, 4 hold."),
                    ("headache", "Headache? 💆 Rest your eyes. Massage your temples. Breathe."),
                    ("lazy", "Feeling lazy? 😌 That's okay. A small stretch counts ⚡"),
                    ("burnt out", "Burnt out? 🕊️ Fresh air helps. Step outside and breathe."),
                    ("mentally tired", "Brain tired? 🧠 Picture a quiet beach for a moment..."),
                    ("low energy", "Low energy? 🌞 Water, a stretch, one deep breath."),
                    ("feeling heavy", "Heavy? 🪷 Breathe in light... exhale the weight..."),
                    ("confused", "Confused? 🌿 Pause. One thing at a time."),
                    ("restless", "Restless? 🌀 Stand up. Shake out your arms and legs."),
                ],
                "I hear you. Want to breathe with me for a moment?",
            ),
            implied_feature: Some(FeatureId::Breathing),
        },
        IntentCategory {
            id: CategoryId::HighStress,
            keywords: kw(&[
                "anxious", "stressed", "panic", "panicking", "overwhelmed", "scared",
                "nervous", "can't breathe", "heart racing", "breaking down",
                "losing control", "too much stress", "mental pressure",
            ]),
            replies: keyed(
                &[
                    ("anxious", "You're not alone 🤍 Inhale through your nose... 4 seconds... exhale slowly."),
                    ("stressed", "So much stress... Pause. Breathe deep. Maybe a calm song? 🎶"),
                    ("panic", "You are SAFE. Ground yourself—name 3 things you can see 👀"),
                    ("panicking", "Breathe with me. In for 4... out for 6... Look around. You are safe 🌿"),
                    ("overwhelmed", "Too much? Pause. Breathe slowly. Want to write it down? 📝"),
                    ("scared", "Scared? Close your eyes. Picture a safe place. Breathe 🤍"),
                    ("nervous", "Nervous? Ground yourself—5 things you can see, quick! 👀"),
                    ("can't breathe", "You can breathe. Slowly... in for 4... out for 6... steady 🍃"),
                    ("heart racing", "Heart going fast? Slow it down. Gentle breath in... long breath out 🌸"),
                    ("breaking down", "It's okay. Cry if you need to. Wrap your arms around yourself 💙"),
                    ("losing control", "Hand on your heart. Breathe. You are here. You are safe 🌿"),
                    ("too much stress", "Too much 🛑 Pause. Breathe deep. Let it go... 🍃"),
                    ("mental pressure", "Pressure... Breathe in... out... Write down one worry 📝"),
                ],
                "I'm here 🤍 Slow down... breathe with me.",
            ),
            implied_feature: Some(FeatureId::Grounding),
        },
        IntentCategory {
            id: CategoryId::LowMood,
            keywords: kw(&[
                "sad", "lonely", "empty", "hopeless", "down", "low", "depressed",
                "crying", "like crying", "feeling alone", "no one understands",
                "worthless", "demotivated", "lost", "numb",
            ]),
            replies: keyed(
                &[
                    ("sad", "Sad? 💛 That's okay. Breathe deep. I'm right here."),
                    ("lonely", "You're not alone—I'm here 🤍 Talk to me."),
                    ("empty", "Empty? 💫 Look at a color. Listen to a sound. Feel life around you 🌿"),
                    ("hopeless", "I know it feels that way. But hope is there. Breathe. Focus on now 💙"),
                    ("down", "Feeling down? 🌱 Stretch gently. Look at the sky ☁️"),
                    ("low", "Low? 💛 Quiet time. Warm tea? A soothing song? 🎶"),
                    ("depressed", "You're not alone 🤍 Want to write one thought down? It helps 📝"),
                    ("crying", "Cry... it's okay 💧 Let it out. You are safe 🌸"),
                    ("like crying", "Want to cry? 🌸 It's okay. Breathe gently."),
                    ("feeling alone", "I'm here 💙 You are not alone. Hold something comforting 🧸"),
                    ("no one understands", "I'm listening 🌿 Share with me."),
                    ("worthless", "No. You are precious 💛 Name one small good thing you did ✨"),
                    ("demotivated", "No motivation? 🌱 Do just ONE small thing. A tiny step 🦶"),
                    ("lost", "Lost? 💫 Breathe. Just do the next small thing 🧭"),
                    ("numb", "Numb? 🌿 Touch something textured. Notice it. You are here."),
                ],
                "Thank you for telling me. I'm here 🤍",
            ),
            implied_feature: Some(FeatureId::Writing),
        },
        IntentCategory {
            id: CategoryId::Anger,
            keywords: kw(&[
                "angry", "irritated", "frustrated", "annoyed", "fed up", "mad", "rage",
                "furious", "pissed", "can't tolerate", "had enough",
            ]),
            replies: keyed(
                &[
                    ("angry", "Angry? 😤 Breathe deeply. Exhale hard. Shake out your hands 👋"),
                    ("irritated", "Irritated? 🌿 Pause. Inhale slowly. Look at something calm 🌸"),
                    ("frustrated", "Frustrated? 😔 Write it down, or take a walk 🚶"),
                    ("annoyed", "Annoyed? 💛 Step back. Breathe. Let it pass 🍃"),
                    ("fed up", "Fed up? 💙 Breathe deep. Ground yourself—5 things you can see 👀"),
                    ("mad", "Mad? 🌱 Squeeze a pillow. Breathe 🧸"),
                    ("rage", "Rage 💫 Slow, steady breaths. Let it out 🌬️"),
                    ("furious", "Furious? 😌 Clench your fists... release... breathe ✊"),
                    ("pissed", "Go outside if you can. Fresh air. Move your body 🏃"),
                    ("can't tolerate", "Hard to tolerate? 💛 Pause. Breathe. Write down one bother 📝"),
                    ("had enough", "Enough 😌 Slow breaths. Sip water. Stretch 💧"),
                ],
                "That sounds intense 😤 Want to vent?",
            ),
            implied_feature: Some(FeatureId::AngerRelease),
        },
        IntentCategory {
            id: CategoryId::Sleep,
            keywords: kw(&[
                "sleepy", "can't sleep", "insomnia", "late night", "night thoughts",
                "need rest", "want to sleep", "feeling drowsy", "bed time",
            ]),
            replies: keyed(
                &[
                    ("sleepy", "Sleepy? 😌 Close your eyes. Deep breaths. Relax... 💤"),
                    ("can't sleep", "Can't sleep? 🌙 Picture a cloud... float with it ☁️"),
                    ("insomnia", "Insomnia? 💛 Try 4-7-8 breathing: in 4, hold 7, out 8 🌬️"),
                    ("late night", "It's late 🌌 Breathe deep. Let the thoughts go... 🍃"),
                    ("night thoughts", "Racing thoughts? 💤 Write them down, or blow them away 🌬️"),
                    ("need rest", "Need rest? 🌿 Lie down. Close your eyes. Calm your mind 🌸"),
                    ("want to sleep", "Want sleep? 🌙 Count backwards from 50... slowly 📉"),
                    ("feeling drowsy", "Drowsy... 😴 Relax fully. Goodnight."),
                    ("bed time", "Bedtime 🌌 Dim the lights. Deep breaths. Sweet dreams ⭐"),
                ],
                "Sleep time? 🌙 Want me to help?",
            ),
            implied_feature: Some(FeatureId::SleepSupport),
        },
        IntentCategory {
            id: CategoryId::Affirmation,
            keywords: kw(&[
                "affirmation", "positive thought", "need strength", "encourage me",
                "say something nice", "give me hope", "i feel weak", "need positivity",
                "boost my morale",
            ]),
            replies: pool(&[
                "You are stronger than you know 💛",
                "You are capable. You are resilient 🌿",
                "Breathe in confidence... breathe out doubt ✨",
                "Your feelings are valid, and you matter 💙",
                "One step at a time. Be gentle with yourself 🌱",
                "You've survived 100% of your hardest days. Keep going 🌻",
            ]),
            implied_feature: None,
        },
        IntentCategory {
            id: CategoryId::Motivation,
            keywords: kw(&[
                "motivate me", "need motivation", "inspire me", "feel stuck",
                "give me energy", "push me", "i can't do it", "too hard", "give up",
            ]),
            replies: pool(&[
                "Believe you can, and you're halfway there 🚀",
                "Slow is okay. Just don't stop 🐢",
                "Small steps still move you forward 💡",
                "Don't watch the clock—keep moving ⏰",
                "Dream big. You are capable of more than you think 🌟",
                "Difficult roads lead to beautiful places. Hang in there 🏔️",
            ]),
            implied_feature: None,
        },
        IntentCategory {
            id: CategoryId::Story,
            keywords: kw(&[
                "tell me a story", "bedtime story", "read a story", "story time",
                "short story", "calm story", "relaxing story",
            ]),
            replies: keyed(&[], "Stories? 📖 I love stories. Want to hear one?"),
            implied_feature: Some(FeatureId::Stories),
        },
        IntentCategory {
            id: CategoryId::Game,
            keywords: kw(&[
                "play a game", "bored", "play with me", "riddle", "puzzle", "fun",
                "entertainment", "game", "play",
            ]),
            replies: keyed(&[], "Let's play! 🎮 How about a riddle?"),
            implied_feature: Some(FeatureId::Games),
        },
        IntentCategory {
            id: CategoryId::Yoga,
            keywords: kw(&["yoga", "do yoga", "stretch", "stretching", "asana", "pose"]),
            replies: keyed(&[], "Yoga time? 🧘 Let's stretch. Ready?"),
            implied_feature: Some(FeatureId::Yoga),
        },
        IntentCategory {
            id: CategoryId::Exercise,
            keywords: kw(&["exercise", "workout", "gym", "fitness", "training"]),
            replies: keyed(&[], "Exercise! 🏃 Let's get moving. Ready? ⚡"),
            implied_feature: Some(FeatureId::Exercise),
        },
        IntentCategory {
            id: CategoryId::Help,
            keywords: kw(&[
                "help", "support", "guide me", "what should i do", "suggest", "advice",
                "need help", "can you help", "tell me", "madad", "kya karu",
            ]),
            replies: keyed(
                &[
                    ("help", "I'm here. What's on your mind? 💙"),
                    ("support", "I've got you 🌿 Tell me, so I can help."),
                    ("guide me", "Sure 🙏 Step by step, together."),
                    ("what should i do", "Let's think it through 🌱 Tell me about it?"),
                    ("suggest", "I have ideas 💛 What's happening?"),
                    ("advice", "I'm here 💙 Let's see what helps."),
                    ("need help", "I'm listening 🌸 What do you need?"),
                    ("can you help", "Yes 💛 What is troubling you?"),
                    ("tell me", "Sure 🌿 I'm all ears 👂"),
                    ("madad", "Bilkul 💙 Main yahin hoon. Kya chahiye?"),
                    ("kya karu", "Chinta mat karo 🌿 Saath sochte hain."),
                ],
                "I'm here 💙 Tell me more.",
            ),
            implied_feature: None,
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_declaration_order_is_stable() {
        let order: Vec<CategoryId> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(order[0], CategoryId::Menu);
        assert_eq!(order[1], CategoryId::Greeting);
        assert_eq!(order[4], CategoryId::MildStress);
        assert_eq!(order[15], CategoryId::Help);
        assert_eq!(order.len(), 16);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for category in CATEGORIES.iter() {
            for keyword in &category.keywords {
                assert_eq!(
                    keyword,
                    &keyword.to_lowercase(),
                    "keyword {keyword:?} in {:?} must be lowercase",
                    category.id
                );
            }
        }
    }

    #[test]
    fn test_keyed_entries_reference_registered_keywords() {
        for category in CATEGORIES.iter() {
            if let ReplySet::Keyed { entries, .. } = &category.replies {
                for (key, _) in entries {
                    assert!(
                        category.keywords.contains(key),
                        "keyed reply {key:?} in {:?} has no matching keyword",
                        category.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_reply_is_empty() {
        for category in CATEGORIES.iter() {
            match &category.replies {
                ReplySet::Pool(pool) => {
                    assert!(!pool.is_empty());
                    assert!(pool.iter().all(|r| !r.is_empty()));
                }
                ReplySet::Keyed { entries, default } => {
                    assert!(!default.is_empty());
                    assert!(entries.iter().all(|(_, r)| !r.is_empty()));
                }
            }
        }
        assert!(!FALLBACK_REPLY.is_empty());
    }
}
