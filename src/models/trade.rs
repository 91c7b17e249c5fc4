use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Forex,
    Crypto,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Breakeven,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    #[default]
    Executed,
    Planned,
}

/// One executed (or planned) position.
///
/// `pnl` and `risk_reward` are denormalized: they hold either the value
/// derived from the price/size fields or an explicit user override. The
/// `*_override` flags record which, so "user entered 0" is distinguishable
/// from "not overridden".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub date: DateTime<Utc>,
    pub asset: String,
    pub asset_type: AssetType,
    pub direction: Direction,
    pub entry_price: Option<f64>,
    pub exit_price: Option<f64>,
    pub position_size: Option<f64>,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub outcome: Outcome,
    pub strategy: String,
    pub emotional_state: String,
    pub notes: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
    pub pnl: f64,
    #[serde(default)]
    pub pnl_override: bool,
    pub risk_reward: f64,
    #[serde(default)]
    pub risk_reward_override: bool,
    #[serde(default)]
    pub status: TradeStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTradeInput {
    pub date: Option<DateTime<Utc>>,
    pub asset: String,
    pub asset_type: AssetType,
    pub direction: Direction,
    pub entry_price: Option<f64>,
    pub exit_price: Option<f64>,
    pub position_size: Option<f64>,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub outcome: Outcome,
    pub strategy: String,
    pub emotional_state: String,
    pub notes: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
    /// Explicit P/L override; when absent the P/L is derived.
    pub pnl: Option<f64>,
    /// Explicit R:R override; when absent the ratio is derived.
    pub risk_reward: Option<f64>,
    pub status: Option<TradeStatus>,
}

/// Partial update: only the provided fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeUpdate {
    pub date: Option<DateTime<Utc>>,
    pub asset: Option<String>,
    pub asset_type: Option<AssetType>,
    pub direction: Option<Direction>,
    pub entry_price: Option<f64>,
    pub exit_price: Option<f64>,
    pub position_size: Option<f64>,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub outcome: Option<Outcome>,
    pub strategy: Option<String>,
    pub emotional_state: Option<String>,
    pub notes: Option<String>,
    pub screenshots: Option<Vec<String>>,
    /// Explicit P/L override for the updated trade.
    pub pnl: Option<f64>,
    /// Explicit R:R override for the updated trade.
    pub risk_reward: Option<f64>,
    pub status: Option<TradeStatus>,
}
