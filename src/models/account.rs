use serde::{Deserialize, Serialize};

/// A capital pool trades are attributed to.
///
/// `current_balance` is derived: it always equals `initial_balance` plus
/// the summed P/L of the trades referenced by `trades`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub initial_balance: f64,
    pub current_balance: f64,
    pub trades: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountInput {
    pub name: String,
    pub initial_balance: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAccountInput {
    pub name: Option<String>,
}
