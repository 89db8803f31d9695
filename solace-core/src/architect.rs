//! The life-architect command router.
//!
//! A small productivity side-channel that runs before the emotional
//! dialogue: bucket-list goals, a day planner, habits, offline bookings,
//! and an idea vault. Commands are matched case-insensitively; anything
//! the router does not recognize returns `None` and flows on to the
//! dialogue path untouched.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Most recent history entries kept per session.
pub const HISTORY_CAP: usize = 50;

/// What a task-manager entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// A long-term bucket-list goal.
    Goal,
    /// An ordinary task.
    Task,
}

/// One task-manager entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub kind: TaskKind,
    pub content: String,
}

/// One day-planner entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerEntry {
    pub content: String,
    pub completed: bool,
}

/// Everything the life architect remembers across turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchitectState {
    pub tasks: Vec<TaskEntry>,
    pub planner: Vec<PlannerEntry>,
    pub habits: Vec<String>,
    pub ideas: Vec<String>,
    pub offline: Vec<String>,
    /// Timestamped transcript, capped at [`HISTORY_CAP`] entries.
    pub history: Vec<String>,
    /// Display theme chosen by the user, if any.
    pub theme: Option<String>,
}

impl ArchitectState {
    /// Append a `[HH:MM] Speaker: text` line, dropping the oldest entry
    /// once the cap is reached.
    pub fn record_history(&mut self, speaker: &str, text: &str) {
        self.history
            .push(format!("[{}] {speaker}: {text}", clock_stamp()));
        if self.history.len() > HISTORY_CAP {
            self.history.remove(0);
        }
    }

    /// A text dashboard of every list.
    pub fn dashboard_summary(&self) -> String {
        let mut out = String::from("📲 **Life Architect Dashboard**\n");
        out.push_str(&section(
            "🌟 Goals",
            &self
                .tasks
                .iter()
                .filter(|t| t.kind == TaskKind::Goal)
                .map(|t| t.content.clone())
                .collect::<Vec<_>>(),
        ));
        out.push_str(&section(
            "☑️ Tasks",
            &self
                .tasks
                .iter()
                .filter(|t| t.kind == TaskKind::Task)
                .map(|t| t.content.clone())
                .collect::<Vec<_>>(),
        ));
        out.push_str(&section(
            "📅 Planner",
            &self
                .planner
                .iter()
                .map(|p| p.content.clone())
                .collect::<Vec<_>>(),
        ));
        out.push_str(&section("🔄 Habits", &self.habits));
        out.push_str(&section("💡 Ideas", &self.ideas));
        out.push_str(&section("📍 Offline", &self.offline));
        out
    }
}

fn section(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let body: String = items.iter().map(|i| format!("• {i}\n")).collect();
    format!("\n**{title}**\n{body}")
}

/// Wall-clock `HH:MM` (UTC) for history stamps.
fn clock_stamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let minutes_of_day = (secs / 60) % (24 * 60);
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}

/// Strip the first occurrence of each phrase from `input`, ignoring ASCII
/// case, and trim the rest. Command phrases are all ASCII, so byte-window
/// comparison is safe.
fn strip_phrases(input: &str, phrases: &[&str]) -> String {
    let mut out = input.trim().to_string();
    for phrase in phrases {
        if let Some(pos) = find_ignore_ascii_case(&out, phrase) {
            out.replace_range(pos..pos + phrase.len(), "");
        }
    }
    out.trim().to_string()
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| {
        haystack.is_char_boundary(i)
            && haystack.is_char_boundary(i + needle.len())
            && haystack[i..i + needle.len()].eq_ignore_ascii_case(needle)
    })
}

/// Try to handle `input` as a life-architect command.
///
/// Returns `Some(reply)` when a command matched (state may have been
/// mutated), `None` when the input belongs to the dialogue path.
pub fn route(input: &str, state: &mut ArchitectState) -> Option<String> {
    let clean = input.trim();
    let lower = clean.to_lowercase();

    if lower.contains("healing") || lower.contains("mental health") {
        return Some(
            "🌿 **Healing & Mindfulness**\n\nI can help you with:\n\
             - **Breathing exercises** (say 'breathe')\n\
             - **Grounding** (say 'grounding')\n\
             - **Journaling** (say 'writing')\n\
             - **Venting** (just start typing)\n\n\
             What do you need right now?"
                .to_string(),
        );
    }

    // Bucket list: "Add [X] to my bucket list"
    if lower.contains("add") && lower.contains("bucket list") {
        let item = strip_phrases(clean, &["add", "to my bucket list", "to bucket list"]);
        if !item.is_empty() {
            state.tasks.push(TaskEntry {
                kind: TaskKind::Goal,
                content: item.clone(),
            });
            return Some(format!(
                "✅ Added **\"{item}\"** to your **Bucket List** (long-term goals).\n\nAnything else?"
            ));
        }
    }

    if lower == "task manager" || lower == "show tasks" {
        if state.tasks.is_empty() {
            return Some(
                "📁 **Task Manager**\n\nYour list is empty. Start by saying \
                 'Add [Goal] to my bucket list'."
                    .to_string(),
            );
        }
        let mut msg = String::from("📁 **Task Manager**\n");
        msg.push_str(&section(
            "🌟 Goals",
            &state
                .tasks
                .iter()
                .filter(|t| t.kind == TaskKind::Goal)
                .map(|t| t.content.clone())
                .collect::<Vec<_>>(),
        ));
        msg.push_str(&section(
            "☑️ Tasks",
            &state
                .tasks
                .iter()
                .filter(|t| t.kind == TaskKind::Task)
                .map(|t| t.content.clone())
                .collect::<Vec<_>>(),
        ));
        return Some(msg);
    }

    // Day planner: "Put [X] on my schedule" / "Add [X] to my planner"
    if (lower.contains("put") && lower.contains("schedule"))
        || (lower.contains("add") && lower.contains("planner"))
    {
        let item = strip_phrases(
            clean,
            &["put", "on my schedule", "add", "to my planner", "to planner"],
        );
        if !item.is_empty() {
            state.planner.push(PlannerEntry {
                content: item.clone(),
                completed: false,
            });
            return Some(format!(
                "📅 Added **\"{item}\"** to your **Day Planner**.\n\nAnything else?"
            ));
        }
    }

    if lower == "day planner" || lower == "my schedule" {
        if state.planner.is_empty() {
            return Some(
                "📅 **Day Planner**\n\nYour schedule is clear. Add items by \
                 saying 'Put [Meeting] on my schedule'."
                    .to_string(),
            );
        }
        let schedule: String = state
            .planner
            .iter()
            .map(|p| format!("• {}\n", p.content))
            .collect();
        return Some(format!("📅 **Day Planner**\n\n{}", schedule.trim_end()));
    }

    if lower == "habit tracker" || (lower.contains("track") && lower.contains("habit")) {
        return Some(
            "🔄 **Habit Tracker**\n\nTell me a habit to track, like \
             'Add drink water to habits'."
                .to_string(),
        );
    }

    if lower.contains("add") && lower.contains("habit") {
        let item = strip_phrases(clean, &["add", "to habits", "habit"]);
        if !item.is_empty() {
            state.habits.push(item.clone());
            return Some(format!(
                "🔄 Added **\"{item}\"** to your **Habit Tracker**.\n\nAnything else?"
            ));
        }
    }

    if lower.contains("offline section") || lower.contains("offline booking") {
        return Some(
            "🏋️ **Offline Section**\n\nUse this for gym times, doctor visits, \
             and so on. Just say 'Book [Event]'."
                .to_string(),
        );
    }

    if let Some(rest) = lower.strip_prefix("book ") {
        if !rest.trim().is_empty() {
            let item = strip_phrases(clean, &["book"]);
            state.offline.push(item.clone());
            return Some(format!(
                "📍 Booked **\"{item}\"** in your **Offline Section**.\n\nAnything else?"
            ));
        }
    }

    if lower.contains("save idea") {
        let item = strip_phrases(clean, &["save idea"]);
        if item.is_empty() {
            return Some("💡 What's the idea? Say 'Save idea [My Idea]'.".to_string());
        }
        state.ideas.push(item.clone());
        return Some(format!(
            "💡 Saved to **Idea Vault**: \"{item}\".\n\nAnything else?"
        ));
    }

    if lower.contains("idea vault") {
        if state.ideas.is_empty() {
            return Some("💡 **Idea Vault** is empty. Say 'Save idea [My Idea]'.".to_string());
        }
        let ideas: String = state.ideas.iter().map(|i| format!("• {i}\n")).collect();
        return Some(format!("💡 **Idea Vault**\n\n{}", ideas.trim_end()));
    }

    if lower.contains("task manager") || lower.contains("dashboard") || lower.contains("show all") {
        return Some(state.dashboard_summary());
    }

    None
}
