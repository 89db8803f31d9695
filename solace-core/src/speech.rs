//! Text normalization for spoken output, plus the frontend output seams.
//!
//! Replies are written for a chat window: emoji, parenthetical asides,
//! and line breaks. A speech synthesizer should get none of that, so
//! [`normalize_for_speech`] strips display decoration down to plain
//! sentences. The traits let frontends plug in a real synthesizer or
//! transcript sink; the null implementations keep the core runnable
//! headless.

/// Strip display decoration from a reply so it reads naturally aloud.
///
/// Removes emoji and emoji modifiers, drops `(...)` asides such as the
/// consent hint, turns line breaks into sentence pauses, and collapses
/// the leftover whitespace.
pub fn normalize_for_speech(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut paren_depth = 0usize;

    for c in text.chars() {
        match c {
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if paren_depth > 0 => {}
            '\n' => out.push_str(". "),
            _ if is_emoji(c) => {}
            _ => out.push(c),
        }
    }

    collapse_whitespace(&out)
}

/// Emoji and emoji-adjacent scalars that synthesizers mispronounce.
fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F300}'..='\u{1FAFF}'   // pictographs, faces, symbols
        | '\u{2600}'..='\u{26FF}'   // misc symbols
        | '\u{2700}'..='\u{27BF}'   // dingbats
        | '\u{FE0F}'                // variation selector
        | '\u{200D}'                // zero-width joiner
        | '\u{2B50}'                // star
        | '\u{2B55}'                // circle
    )
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = true;
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out.trim().to_string()
}

/// A sink that speaks replies aloud.
pub trait SpeechOutput {
    /// Speak already-normalized text.
    fn speak(&mut self, text: &str);
}

/// A sink that records the visible transcript.
pub trait Transcript {
    fn user_line(&mut self, text: &str);
    fn bot_line(&mut self, text: &str);
}

/// Speech sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeech;

impl SpeechOutput for NullSpeech {
    fn speak(&mut self, _text: &str) {}
}

/// Transcript sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTranscript;

impl Transcript for NullTranscript {
    fn user_line(&mut self, _text: &str) {}
    fn bot_line(&mut self, _text: &str) {}
}

/// Show a bot reply on the transcript and speak its normalized form.
pub fn deliver(reply: &str, transcript: &mut dyn Transcript, speech: &mut dyn SpeechOutput) {
    transcript.bot_line(reply);
    speech.speak(&normalize_for_speech(reply));
}
