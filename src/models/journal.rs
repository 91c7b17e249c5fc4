use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Confident,
    Cautious,
    Frustrated,
    Excited,
    Neutral,
}

/// A free-text reflection tied to a calendar date.
///
/// `trades_count` and `pnl` are snapshotted from that date's trades when
/// the entry is saved, not recomputed on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub mood: Mood,
    pub market_conditions: String,
    pub observations: String,
    pub lessons_learned: String,
    pub trades_count: usize,
    pub pnl: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryInput {
    pub date: Option<NaiveDate>,
    pub mood: Mood,
    pub market_conditions: String,
    pub observations: String,
    pub lessons_learned: String,
    pub trades_count: usize,
    pub pnl: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryUpdate {
    pub date: Option<NaiveDate>,
    pub mood: Option<Mood>,
    pub market_conditions: Option<String>,
    pub observations: Option<String>,
    pub lessons_learned: Option<String>,
    pub trades_count: Option<usize>,
    pub pnl: Option<f64>,
}
