use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::Serialize;

use super::{round1, round2};
use crate::models::{Outcome, Trade};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub date: DateTime<Utc>,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streak {
    #[serde(rename = "type")]
    pub kind: StreakKind,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Drawdown {
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPerformance {
    /// Calendar month key, `YYYY-MM`.
    pub month: String,
    pub pnl: f64,
    pub trade_count: usize,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayStats {
    pub day: String,
    pub trade_count: usize,
    pub pnl: f64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairPerformance {
    pub pair: String,
    pub trade_count: usize,
    pub wins: usize,
    pub losses: usize,
    pub pnl: f64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyStats {
    pub hour: u32,
    pub trade_count: usize,
    pub pnl: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshot {
    pub trades_count: usize,
    pub pnl: f64,
}

/// Running account balance after each trade, oldest first. The first
/// point carries the earliest trade's date with the un-incremented
/// initial balance; with no trades the curve is a single point at now.
pub fn equity_curve(trades: &[Trade], initial_balance: f64) -> Vec<EquityPoint> {
    if trades.is_empty() {
        return vec![EquityPoint {
            date: Utc::now(),
            balance: initial_balance,
        }];
    }

    let mut sorted: Vec<&Trade> = trades.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut balance = initial_balance;
    let mut points = Vec::with_capacity(sorted.len() + 1);
    points.push(EquityPoint {
        date: sorted[0].date,
        balance,
    });
    for trade in sorted {
        balance += trade.pnl;
        points.push(EquityPoint {
            date: trade.date,
            balance,
        });
    }
    points
}

/// Consecutive run of the same outcome category counting back from the
/// most recent trade. Loss and Breakeven share the loss category, so the
/// streak answers "how long since a win". None for an empty collection.
pub fn current_streak(trades: &[Trade]) -> Option<Streak> {
    let mut sorted: Vec<&Trade> = trades.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let latest = sorted.first()?;
    let kind = if latest.outcome == Outcome::Win {
        StreakKind::Win
    } else {
        StreakKind::Loss
    };
    let count = sorted
        .iter()
        .take_while(|t| (t.outcome == Outcome::Win) == (kind == StreakKind::Win))
        .count();
    Some(Streak { kind, count })
}

/// Deepest peak-to-trough decline along the chronological equity walk,
/// as an amount and as a percentage of the peak in effect at the trough.
pub fn max_drawdown(trades: &[Trade], initial_balance: f64) -> Drawdown {
    let mut sorted: Vec<&Trade> = trades.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut balance = initial_balance;
    let mut peak = initial_balance;
    let mut max_amount = 0.0_f64;
    let mut peak_at_max = initial_balance;

    for trade in sorted {
        balance += trade.pnl;
        if balance > peak {
            peak = balance;
        }
        let drawdown = peak - balance;
        if drawdown > max_amount {
            max_amount = drawdown;
            peak_at_max = peak;
        }
    }

    let percentage = if peak_at_max > 0.0 {
        round2(max_amount / peak_at_max * 100.0)
    } else {
        0.0
    };
    Drawdown {
        amount: round2(max_amount),
        percentage,
    }
}

/// Per-calendar-month P/L, trade count and win rate, ascending by month.
pub fn monthly_performance(trades: &[Trade]) -> Vec<MonthlyPerformance> {
    let mut months: BTreeMap<String, Vec<&Trade>> = BTreeMap::new();
    for trade in trades {
        months
            .entry(trade.date.format("%Y-%m").to_string())
            .or_default()
            .push(trade);
    }

    months
        .into_iter()
        .map(|(month, group)| {
            let wins = group.iter().filter(|t| t.outcome == Outcome::Win).count();
            MonthlyPerformance {
                month,
                pnl: group.iter().map(|t| t.pnl).sum(),
                trade_count: group.len(),
                win_rate: round1(wins as f64 / group.len() as f64 * 100.0),
            }
        })
        .collect()
}

/// Per-weekday activity in Sunday-first order, skipping weekdays with no
/// trades.
pub fn weekday_distribution(trades: &[Trade]) -> Vec<WeekdayStats> {
    let mut buckets: [Vec<&Trade>; 7] = Default::default();
    for trade in trades {
        buckets[trade.date.weekday().num_days_from_sunday() as usize].push(trade);
    }

    WEEKDAYS
        .iter()
        .zip(buckets.iter())
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(day, bucket)| {
            let wins = bucket.iter().filter(|t| t.outcome == Outcome::Win).count();
            WeekdayStats {
                day: (*day).to_string(),
                trade_count: bucket.len(),
                pnl: bucket.iter().map(|t| t.pnl).sum(),
                win_rate: round1(wins as f64 / bucket.len() as f64 * 100.0),
            }
        })
        .collect()
}

/// Per-asset performance, best total P/L first. Non-winning outcomes
/// (including breakeven) count on the loss side.
pub fn pair_performance(trades: &[Trade]) -> Vec<PairPerformance> {
    let mut pairs: HashMap<&str, Vec<&Trade>> = HashMap::new();
    for trade in trades {
        pairs.entry(trade.asset.as_str()).or_default().push(trade);
    }

    let mut rows: Vec<PairPerformance> = pairs
        .into_iter()
        .map(|(pair, group)| {
            let wins = group.iter().filter(|t| t.outcome == Outcome::Win).count();
            PairPerformance {
                pair: pair.to_string(),
                trade_count: group.len(),
                wins,
                losses: group.len() - wins,
                pnl: group.iter().map(|t| t.pnl).sum(),
                win_rate: round1(wins as f64 / group.len() as f64 * 100.0),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.pnl.partial_cmp(&a.pnl).unwrap_or(Ordering::Equal));
    rows
}

/// Trading activity by hour of day (UTC), ascending, skipping empty
/// hours.
pub fn hourly_distribution(trades: &[Trade]) -> Vec<HourlyStats> {
    let mut buckets: Vec<Vec<&Trade>> = vec![Vec::new(); 24];
    for trade in trades {
        buckets[trade.date.hour() as usize].push(trade);
    }

    buckets
        .iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(hour, bucket)| HourlyStats {
            hour: hour as u32,
            trade_count: bucket.len(),
            pnl: bucket.iter().map(|t| t.pnl).sum(),
        })
        .collect()
}

/// Count and summed P/L of the trades on one UTC calendar date. Journal
/// entries snapshot this at save time.
pub fn daily_snapshot(trades: &[Trade], date: NaiveDate) -> DailySnapshot {
    let day: Vec<&Trade> = trades
        .iter()
        .filter(|t| t.date.date_naive() == date)
        .collect();
    DailySnapshot {
        trades_count: day.len(),
        pnl: day.iter().map(|t| t.pnl).sum(),
    }
}
