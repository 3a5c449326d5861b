//! Synthetic status snapshots and quotes.
//!
//! Both are generated fresh on every call and never persisted.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::ambient::{Clock, Randomness};

pub const QUOTES: [&str; 5] = [
    "To err is human.",
    "I need coffee before I can feel empathy.",
    "A bad day still has a smell.",
    "Inefficient by design.",
    "No GPU can carry legal responsibility.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaffeineLevel {
    Critical,
    Danger,
    Adequate,
    RunningOnFumes,
}

pub const CAFFEINE_LEVELS: [CaffeineLevel; 4] = [
    CaffeineLevel::Critical,
    CaffeineLevel::Danger,
    CaffeineLevel::Adequate,
    CaffeineLevel::RunningOnFumes,
];

impl CaffeineLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Danger => "danger",
            Self::Adequate => "adequate",
            Self::RunningOnFumes => "running_on_fumes",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub heartbeat_bpm: u32,
    pub online_humans: u32,
    pub tasks_completed_today: u32,
    pub caffeine_level: CaffeineLevel,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteReading {
    pub quote: &'static str,
    pub at: String,
}

pub fn heartbeat_snapshot(randomness: &dyn Randomness, clock: &dyn Clock) -> StatusSnapshot {
    StatusSnapshot {
        heartbeat_bpm: randomness.in_range(64, 92),
        online_humans: randomness.in_range(8, 47),
        tasks_completed_today: randomness.in_range(2, 19),
        caffeine_level: CAFFEINE_LEVELS[randomness.pick(CAFFEINE_LEVELS.len())],
        updated_at: clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

pub fn pick_quote(randomness: &dyn Randomness, clock: &dyn Clock) -> QuoteReading {
    QuoteReading {
        quote: QUOTES[randomness.pick(QUOTES.len())],
        at: clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

pub fn render_heartbeat_markdown(snapshot: &StatusSnapshot) -> String {
    [
        "# All-Human Heartbeat".to_string(),
        format!("- **Humans Online**: {}", snapshot.online_humans),
        format!("- **Biological HrtRt**: {} bpm", snapshot.heartbeat_bpm),
        format!(
            "- **Tasks Completed Today**: {}",
            snapshot.tasks_completed_today
        ),
        format!("- **Caffeine Level**: {}", snapshot.caffeine_level.as_str()),
        format!("- **Updated**: {}", snapshot.updated_at),
    ]
    .join("\n")
}

pub fn render_quote_markdown(reading: &QuoteReading) -> String {
    format!("# Quote\n\n{}", reading.quote)
}
