use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Profit,
    Winrate,
    Trades,
}

/// A target the trader tracks. `completed` always equals
/// `current >= target`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub target: f64,
    pub current: f64,
    pub deadline: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalInput {
    pub title: String,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub target: f64,
    pub current: Option<f64>,
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalUpdate {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: Option<GoalType>,
    pub target: Option<f64>,
    pub current: Option<f64>,
    pub deadline: Option<NaiveDate>,
}
