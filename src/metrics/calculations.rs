use super::{round1, round2};
use crate::models::{Direction, Outcome, Trade};

/// Profit/loss for a single trade from its price and size fields.
/// Returns 0 when entry, exit or size is missing or zero.
pub fn calculate_pnl(trade: &Trade) -> f64 {
    let (entry, exit, size) = match (trade.entry_price, trade.exit_price, trade.position_size) {
        (Some(entry), Some(exit), Some(size)) => (entry, exit, size),
        _ => return 0.0,
    };
    if entry == 0.0 || exit == 0.0 || size == 0.0 {
        return 0.0;
    }

    match trade.direction {
        Direction::Long => (exit - entry) * size,
        Direction::Short => (entry - exit) * size,
    }
}

/// Risk:reward ratio from the stop-loss/take-profit distances, two
/// decimals. Returns 0 when entry, stop or take is missing or zero, or
/// when the risk distance is zero.
pub fn calculate_risk_reward(trade: &Trade) -> f64 {
    let (entry, stop, take) = match (trade.entry_price, trade.stop_loss, trade.take_profit) {
        (Some(entry), Some(stop), Some(take)) => (entry, stop, take),
        _ => return 0.0,
    };
    if entry == 0.0 || stop == 0.0 || take == 0.0 {
        return 0.0;
    }

    let risk = (entry - stop).abs();
    let reward = (take - entry).abs();
    if risk > 0.0 {
        round2(reward / risk)
    } else {
        0.0
    }
}

/// Percentage of trades with outcome Win, one decimal. 0 for no trades.
pub fn calculate_win_rate(trades: &[Trade]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let wins = trades.iter().filter(|t| t.outcome == Outcome::Win).count();
    round1(wins as f64 / trades.len() as f64 * 100.0)
}

/// Mean P/L of winning trades. 0 if there are none.
pub fn calculate_average_win(trades: &[Trade]) -> f64 {
    let wins: Vec<f64> = trades
        .iter()
        .filter(|t| t.outcome == Outcome::Win)
        .map(|t| t.pnl)
        .collect();
    if wins.is_empty() {
        return 0.0;
    }
    wins.iter().sum::<f64>() / wins.len() as f64
}

/// Mean loss magnitude of losing trades. 0 if there are none.
pub fn calculate_average_loss(trades: &[Trade]) -> f64 {
    let losses: Vec<f64> = trades
        .iter()
        .filter(|t| t.outcome == Outcome::Loss)
        .map(|t| t.pnl.abs())
        .collect();
    if losses.is_empty() {
        return 0.0;
    }
    losses.iter().sum::<f64>() / losses.len() as f64
}

/// Summed P/L over all trades.
pub fn calculate_net_pnl(trades: &[Trade]) -> f64 {
    trades.iter().map(|t| t.pnl).sum()
}

/// Mean risk:reward over trades with a positive ratio, two decimals.
pub fn calculate_average_rr(trades: &[Trade]) -> f64 {
    let ratios: Vec<f64> = trades
        .iter()
        .map(|t| t.risk_reward)
        .filter(|rr| *rr > 0.0)
        .collect();
    if ratios.is_empty() {
        return 0.0;
    }
    round2(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

/// Gross profit divided by gross loss magnitude, two decimals.
/// 0 when there are no losing trades.
pub fn calculate_profit_factor(trades: &[Trade]) -> f64 {
    let gross_profit: f64 = trades.iter().map(|t| t.pnl).filter(|p| *p > 0.0).sum();
    let gross_loss: f64 = trades
        .iter()
        .map(|t| t.pnl)
        .filter(|p| *p < 0.0)
        .sum::<f64>()
        .abs();
    if gross_loss == 0.0 {
        return 0.0;
    }
    round2(gross_profit / gross_loss)
}

/// Expected P/L per trade given the historical win rate and average
/// win/loss sizes, two decimals.
pub fn calculate_expectancy(trades: &[Trade]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let wins = trades.iter().filter(|t| t.outcome == Outcome::Win).count();
    let win_fraction = wins as f64 / trades.len() as f64;
    let avg_win = calculate_average_win(trades);
    let avg_loss = calculate_average_loss(trades);
    round2(win_fraction * avg_win - (1.0 - win_fraction) * avg_loss)
}
