use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key that every entry carries next to its flattened emote counts.
pub const DATE_KEY: &str = "date";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// One team's counts for a single date. Only emote kinds that occurred are
/// present; a missing kind reads as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub date: String,
    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
}

impl Entry {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            counts: BTreeMap::new(),
        }
    }

    pub fn count(&self, emote: &str) -> u64 {
        self.counts.get(emote).copied().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct EmoteRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub emote: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Anger,
    Joy,
    Sadness,
    Exhaustion,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Anger, Mood::Joy, Mood::Sadness, Mood::Exhaustion];

    pub fn key(self) -> &'static str {
        match self {
            Mood::Anger => "anger",
            Mood::Joy => "joy",
            Mood::Sadness => "sadness",
            Mood::Exhaustion => "exhaustion",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Anger => "Anger",
            Mood::Joy => "Joy",
            Mood::Sadness => "Sadness",
            Mood::Exhaustion => "Exhaustion",
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ChartDataset {
    pub label: &'static str,
    pub emote: Mood,
    pub data: Vec<Option<u64>>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ChartResponse {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}
