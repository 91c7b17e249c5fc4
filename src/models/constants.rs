//! Built-in option lists for asset, strategy and emotional-state pickers.
//! User-defined pairs live in the trade store's custom pair collection.

pub const FOREX_PAIRS: &[&str] = &[
    "EURUSD", "GBPUSD", "USDJPY", "USDCAD", "AUDUSD", "NZDUSD", "EURGBP", "EURJPY", "GBPJPY",
];

pub const CRYPTO_ASSETS: &[&str] = &["BTC", "ETH"];

pub const STRATEGIES: &[&str] = &[
    "Breakout",
    "Trend Following",
    "Reversal",
    "Scalping",
    "Range Trading",
    "News Trading",
    "Swing Trading",
    "Position Trading",
];

pub const EMOTIONAL_STATES: &[&str] = &[
    "Confident",
    "Anxious",
    "Calm",
    "FOMO",
    "Revenge Trading",
    "Disciplined",
    "Uncertain",
    "Excited",
    "Frustrated",
    "Neutral",
];
