use chrono::Utc;
use uuid::Uuid;

use crate::error::JournalError;
use crate::metrics::{calculate_pnl, calculate_risk_reward};
use crate::models::{
    Account, CreateAccountInput, CreateTradeInput, Trade, TradeUpdate, UpdateAccountInput,
};
use crate::storage::{keys, StorageHandle};

pub const DEFAULT_ACCOUNT_NAME: &str = "Main Account";
pub const DEFAULT_ACCOUNT_BALANCE: f64 = 10_000.0;

/// Owns the trade and account collections and keeps every account's
/// running balance consistent with the P/L of the trades it references.
///
/// Operations addressing an unknown id return `Ok(false)` / `Ok(None)`;
/// an `Err` always means the persistence adapter failed, never a domain
/// condition.
pub struct TradeStore {
    storage: StorageHandle,
    accounts: Vec<Account>,
    trades: Vec<Trade>,
    custom_pairs: Vec<String>,
    selected_account_id: Option<String>,
}

impl TradeStore {
    /// Hydrate from the persistence adapter. Missing or malformed
    /// collections degrade to empty; if no account survives loading, a
    /// default one is synthesized and persisted so the store always has
    /// a selection to attribute trades to.
    pub fn load(storage: StorageHandle) -> Result<Self, JournalError> {
        let accounts: Vec<Account> = storage.read_collection(keys::ACCOUNTS);
        let trades: Vec<Trade> = storage.read_collection(keys::TRADES);
        let custom_pairs: Vec<String> = storage.read_collection(keys::CUSTOM_PAIRS);
        let stored_selection = storage.get(keys::SELECTED_ACCOUNT)?;

        let mut store = Self {
            storage,
            accounts,
            trades,
            custom_pairs,
            selected_account_id: None,
        };

        if store.accounts.is_empty() {
            let account = Account {
                id: new_id(),
                name: DEFAULT_ACCOUNT_NAME.to_string(),
                initial_balance: DEFAULT_ACCOUNT_BALANCE,
                current_balance: DEFAULT_ACCOUNT_BALANCE,
                trades: Vec::new(),
            };
            log::info!("No accounts found, creating '{}'", account.name);
            store.selected_account_id = Some(account.id.clone());
            store.accounts.push(account);
            store.save_accounts()?;
            store.save_selection()?;
        } else {
            let selected = stored_selection
                .filter(|id| store.accounts.iter().any(|a| &a.id == id))
                .unwrap_or_else(|| store.accounts[0].id.clone());
            store.selected_account_id = Some(selected);
        }

        Ok(store)
    }

    // ----- trades -----

    /// Record a new trade against the selected account. P/L and R:R are
    /// derived from the trade's own fields unless the input carries
    /// explicit overrides.
    pub fn add_trade(&mut self, input: CreateTradeInput) -> Result<Trade, JournalError> {
        let mut trade = Trade {
            id: new_trade_id(),
            date: input.date.unwrap_or_else(Utc::now),
            asset: input.asset,
            asset_type: input.asset_type,
            direction: input.direction,
            entry_price: input.entry_price,
            exit_price: input.exit_price,
            position_size: input.position_size,
            stop_loss: input.stop_loss,
            take_profit: input.take_profit,
            outcome: input.outcome,
            strategy: input.strategy,
            emotional_state: input.emotional_state,
            notes: input.notes,
            screenshots: input.screenshots,
            pnl: 0.0,
            pnl_override: false,
            risk_reward: 0.0,
            risk_reward_override: false,
            status: input.status.unwrap_or_default(),
        };
        match input.pnl {
            Some(value) => {
                trade.pnl = value;
                trade.pnl_override = true;
            }
            None => trade.pnl = calculate_pnl(&trade),
        }
        match input.risk_reward {
            Some(value) => {
                trade.risk_reward = value;
                trade.risk_reward_override = true;
            }
            None => trade.risk_reward = calculate_risk_reward(&trade),
        }

        if let Some(account) = self.selected_account_mut() {
            account.trades.push(trade.id.clone());
            account.current_balance += trade.pnl;
        }
        self.trades.push(trade.clone());

        self.save_trades()?;
        self.save_accounts()?;
        Ok(trade)
    }

    /// Merge a partial update into an existing trade, re-deriving P/L and
    /// R:R from the merged fields. An explicit override in the patch is
    /// stored verbatim; an override set earlier survives until the field
    /// is overridden again. The owning account's balance moves by the
    /// P/L delta only.
    pub fn update_trade(
        &mut self,
        id: &str,
        patch: TradeUpdate,
    ) -> Result<Option<Trade>, JournalError> {
        let Some(index) = self.trades.iter().position(|t| t.id == id) else {
            return Ok(None);
        };

        let trade = &mut self.trades[index];
        let old_pnl = trade.pnl;

        if let Some(date) = patch.date {
            trade.date = date;
        }
        if let Some(asset) = patch.asset {
            trade.asset = asset;
        }
        if let Some(asset_type) = patch.asset_type {
            trade.asset_type = asset_type;
        }
        if let Some(direction) = patch.direction {
            trade.direction = direction;
        }
        if let Some(entry_price) = patch.entry_price {
            trade.entry_price = Some(entry_price);
        }
        if let Some(exit_price) = patch.exit_price {
            trade.exit_price = Some(exit_price);
        }
        if let Some(position_size) = patch.position_size {
            trade.position_size = Some(position_size);
        }
        if let Some(stop_loss) = patch.stop_loss {
            trade.stop_loss = Some(stop_loss);
        }
        if let Some(take_profit) = patch.take_profit {
            trade.take_profit = Some(take_profit);
        }
        if let Some(outcome) = patch.outcome {
            trade.outcome = outcome;
        }
        if let Some(strategy) = patch.strategy {
            trade.strategy = strategy;
        }
        if let Some(emotional_state) = patch.emotional_state {
            trade.emotional_state = emotional_state;
        }
        if let Some(notes) = patch.notes {
            trade.notes = notes;
        }
        if let Some(screenshots) = patch.screenshots {
            trade.screenshots = screenshots;
        }
        if let Some(status) = patch.status {
            trade.status = status;
        }

        match patch.pnl {
            Some(value) => {
                trade.pnl = value;
                trade.pnl_override = true;
            }
            None if !trade.pnl_override => trade.pnl = calculate_pnl(trade),
            None => {}
        }
        match patch.risk_reward {
            Some(value) => {
                trade.risk_reward = value;
                trade.risk_reward_override = true;
            }
            None if !trade.risk_reward_override => trade.risk_reward = calculate_risk_reward(trade),
            None => {}
        }

        let updated = trade.clone();
        let delta = updated.pnl - old_pnl;
        if delta != 0.0 {
            if let Some(account) = self.owning_account_mut(id) {
                account.current_balance += delta;
            }
        }

        self.save_trades()?;
        self.save_accounts()?;
        Ok(Some(updated))
    }

    /// Remove a trade, detach it from its owning account and roll its
    /// P/L back out of that account's balance.
    pub fn delete_trade(&mut self, id: &str) -> Result<bool, JournalError> {
        let Some(index) = self.trades.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        let trade = self.trades.remove(index);

        if let Some(account) = self.owning_account_mut(id) {
            account.trades.retain(|trade_id| trade_id != id);
            account.current_balance -= trade.pnl;
        }

        self.save_trades()?;
        self.save_accounts()?;
        Ok(true)
    }

    // ----- accounts -----

    pub fn add_account(&mut self, input: CreateAccountInput) -> Result<Account, JournalError> {
        let account = Account {
            id: new_id(),
            name: if input.name.is_empty() {
                "New Account".to_string()
            } else {
                input.name
            },
            initial_balance: input.initial_balance,
            current_balance: input.initial_balance,
            trades: Vec::new(),
        };
        self.accounts.push(account.clone());
        self.save_accounts()?;
        Ok(account)
    }

    /// Delete an account. Its trades stay in the global collection as
    /// unassigned records; if the deleted account was selected, selection
    /// falls back to the first remaining account, or none.
    pub fn delete_account(&mut self, id: &str) -> Result<bool, JournalError> {
        let Some(index) = self.accounts.iter().position(|a| a.id == id) else {
            return Ok(false);
        };
        self.accounts.remove(index);

        if self.selected_account_id.as_deref() == Some(id) {
            self.selected_account_id = self.accounts.first().map(|a| a.id.clone());
            self.save_selection()?;
        }
        self.save_accounts()?;
        Ok(true)
    }

    pub fn switch_account(&mut self, id: &str) -> Result<bool, JournalError> {
        if !self.accounts.iter().any(|a| a.id == id) {
            return Ok(false);
        }
        self.selected_account_id = Some(id.to_string());
        self.save_selection()?;
        Ok(true)
    }

    pub fn update_account(
        &mut self,
        id: &str,
        input: UpdateAccountInput,
    ) -> Result<bool, JournalError> {
        let Some(account) = self.accounts.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        if let Some(name) = input.name {
            account.name = name;
        }
        self.save_accounts()?;
        Ok(true)
    }

    /// Revise an account's starting capital. Both balances shift by the
    /// same delta so the accumulated P/L is preserved.
    pub fn update_account_balance(
        &mut self,
        id: &str,
        new_initial_balance: f64,
    ) -> Result<bool, JournalError> {
        let Some(account) = self.accounts.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        let delta = new_initial_balance - account.initial_balance;
        account.initial_balance = new_initial_balance;
        account.current_balance += delta;
        self.save_accounts()?;
        Ok(true)
    }

    pub fn add_custom_pair(&mut self, pair: &str) -> Result<bool, JournalError> {
        if self.custom_pairs.iter().any(|p| p == pair) {
            return Ok(false);
        }
        self.custom_pairs.push(pair.to_string());
        self.save_custom_pairs()?;
        Ok(true)
    }

    // ----- queries -----

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn trade(&self, id: &str) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    pub fn custom_pairs(&self) -> &[String] {
        &self.custom_pairs
    }

    pub fn selected_account_id(&self) -> Option<&str> {
        self.selected_account_id.as_deref()
    }

    pub fn selected_account(&self) -> Option<&Account> {
        let id = self.selected_account_id.as_deref()?;
        self.accounts.iter().find(|a| a.id == id)
    }

    /// The selected account's trades, resolved through its id list (a
    /// trade carries no back-pointer to an account).
    pub fn get_account_trades(&self) -> Vec<Trade> {
        let Some(account) = self.selected_account() else {
            return Vec::new();
        };
        self.trades
            .iter()
            .filter(|t| account.trades.iter().any(|id| *id == t.id))
            .cloned()
            .collect()
    }

    // ----- internals -----

    fn selected_account_mut(&mut self) -> Option<&mut Account> {
        let id = self.selected_account_id.clone()?;
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    fn owning_account_mut(&mut self, trade_id: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.trades.iter().any(|id| id == trade_id))
    }

    fn save_trades(&self) -> Result<(), JournalError> {
        self.storage.write_collection(keys::TRADES, &self.trades)
    }

    fn save_accounts(&self) -> Result<(), JournalError> {
        self.storage.write_collection(keys::ACCOUNTS, &self.accounts)
    }

    fn save_custom_pairs(&self) -> Result<(), JournalError> {
        self.storage
            .write_collection(keys::CUSTOM_PAIRS, &self.custom_pairs)
    }

    fn save_selection(&self) -> Result<(), JournalError> {
        match &self.selected_account_id {
            Some(id) => self.storage.set(keys::SELECTED_ACCOUNT, id),
            None => self.storage.remove(keys::SELECTED_ACCOUNT),
        }
    }
}

fn new_trade_id() -> String {
    format!("TRADE-{}-{}", Utc::now().timestamp_millis(), Uuid::new_v4())
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::calculate_net_pnl;
    use crate::models::{AssetType, Direction, Outcome};
    use crate::storage::MemoryStorage;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn test_store() -> TradeStore {
        TradeStore::load(StorageHandle::new(MemoryStorage::new())).unwrap()
    }

    fn long_trade_input(entry: f64, exit: f64, size: f64) -> CreateTradeInput {
        CreateTradeInput {
            date: None,
            asset: "EURUSD".to_string(),
            asset_type: AssetType::Forex,
            direction: Direction::Long,
            entry_price: Some(entry),
            exit_price: Some(exit),
            position_size: Some(size),
            stop_loss: None,
            take_profit: None,
            outcome: if exit >= entry {
                Outcome::Win
            } else {
                Outcome::Loss
            },
            strategy: "Breakout".to_string(),
            emotional_state: "Calm".to_string(),
            notes: String::new(),
            screenshots: Vec::new(),
            pnl: None,
            risk_reward: None,
            status: None,
        }
    }

    fn assert_balance_invariant(store: &TradeStore) {
        for account in store.accounts() {
            let referenced_pnl: f64 = store
                .trades()
                .iter()
                .filter(|t| account.trades.iter().any(|id| *id == t.id))
                .map(|t| t.pnl)
                .sum();
            let expected = account.initial_balance + referenced_pnl;
            assert!(
                (account.current_balance - expected).abs() < 1e-6,
                "balance {} != initial {} + pnl {}",
                account.current_balance,
                account.initial_balance,
                referenced_pnl
            );
        }
    }

    #[test]
    fn test_default_account_synthesized() {
        let store = test_store();
        let account = store.selected_account().unwrap();
        assert_eq!(account.name, DEFAULT_ACCOUNT_NAME);
        assert_eq!(account.initial_balance, DEFAULT_ACCOUNT_BALANCE);
        assert_eq!(account.current_balance, DEFAULT_ACCOUNT_BALANCE);
    }

    #[test]
    fn test_add_trade_roundtrip() {
        let mut store = test_store();
        let trade = store.add_trade(long_trade_input(100.0, 110.0, 2.0)).unwrap();

        assert_eq!(trade.pnl, 20.0);
        assert!(!trade.pnl_override);

        let account_trades = store.get_account_trades();
        assert_eq!(account_trades.len(), 1);
        assert_eq!(account_trades[0].id, trade.id);
        assert_eq!(
            store.selected_account().unwrap().current_balance,
            DEFAULT_ACCOUNT_BALANCE + 20.0
        );
        assert_balance_invariant(&store);
    }

    #[test]
    fn test_add_trade_pnl_override() {
        let mut store = test_store();
        let mut input = long_trade_input(100.0, 110.0, 2.0);
        input.pnl = Some(0.0);
        let trade = store.add_trade(input).unwrap();

        assert_eq!(trade.pnl, 0.0);
        assert!(trade.pnl_override);
        assert_eq!(
            store.selected_account().unwrap().current_balance,
            DEFAULT_ACCOUNT_BALANCE
        );
    }

    #[test]
    fn test_add_trade_derives_risk_reward() {
        let mut store = test_store();
        let mut input = long_trade_input(100.0, 110.0, 2.0);
        input.stop_loss = Some(90.0);
        input.take_profit = Some(130.0);
        let trade = store.add_trade(input).unwrap();

        assert_eq!(trade.risk_reward, 3.0);
        assert!(!trade.risk_reward_override);
    }

    #[test]
    fn test_update_trade_rederives_and_adjusts_balance() {
        let mut store = test_store();
        let trade = store.add_trade(long_trade_input(100.0, 110.0, 2.0)).unwrap();

        let updated = store
            .update_trade(
                &trade.id,
                TradeUpdate {
                    exit_price: Some(120.0),
                    ..TradeUpdate::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.pnl, 40.0);
        assert_eq!(
            store.selected_account().unwrap().current_balance,
            DEFAULT_ACCOUNT_BALANCE + 40.0
        );
        assert_balance_invariant(&store);
    }

    #[test]
    fn test_update_trade_empty_patch_is_idempotent() {
        let mut store = test_store();
        let mut input = long_trade_input(100.0, 110.0, 2.0);
        input.pnl = Some(35.0);
        input.risk_reward = Some(1.8);
        let trade = store.add_trade(input).unwrap();
        let balance_before = store.selected_account().unwrap().current_balance;

        let updated = store
            .update_trade(&trade.id, TradeUpdate::default())
            .unwrap()
            .unwrap();

        assert_eq!(updated.pnl, 35.0);
        assert_eq!(updated.risk_reward, 1.8);
        assert!(updated.pnl_override);
        assert_eq!(
            store.selected_account().unwrap().current_balance,
            balance_before
        );
    }

    #[test]
    fn test_update_trade_new_override_replaces_old() {
        let mut store = test_store();
        let mut input = long_trade_input(100.0, 110.0, 2.0);
        input.pnl = Some(35.0);
        let trade = store.add_trade(input).unwrap();

        let updated = store
            .update_trade(
                &trade.id,
                TradeUpdate {
                    pnl: Some(-5.0),
                    ..TradeUpdate::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.pnl, -5.0);
        assert_eq!(
            store.selected_account().unwrap().current_balance,
            DEFAULT_ACCOUNT_BALANCE - 5.0
        );
        assert_balance_invariant(&store);
    }

    #[test]
    fn test_update_unknown_trade_is_none() {
        let mut store = test_store();
        assert!(store
            .update_trade("missing", TradeUpdate::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_delete_trade_rolls_back_balance() {
        let mut store = test_store();
        let trade = store.add_trade(long_trade_input(100.0, 110.0, 2.0)).unwrap();

        assert!(store.delete_trade(&trade.id).unwrap());
        assert!(store.get_account_trades().is_empty());
        assert_eq!(
            store.selected_account().unwrap().current_balance,
            DEFAULT_ACCOUNT_BALANCE
        );
        assert_balance_invariant(&store);
    }

    #[test]
    fn test_delete_unknown_trade_leaves_balances() {
        let mut store = test_store();
        store.add_trade(long_trade_input(100.0, 110.0, 2.0)).unwrap();
        let balance = store.selected_account().unwrap().current_balance;

        assert!(!store.delete_trade("missing").unwrap());
        assert_eq!(store.selected_account().unwrap().current_balance, balance);
    }

    #[test]
    fn test_switch_account() {
        let mut store = test_store();
        let second = store
            .add_account(CreateAccountInput {
                name: "Prop Firm".to_string(),
                initial_balance: 50_000.0,
            })
            .unwrap();

        assert!(store.switch_account(&second.id).unwrap());
        assert_eq!(store.selected_account().unwrap().id, second.id);
        assert!(!store.switch_account("missing").unwrap());
        assert_eq!(store.selected_account().unwrap().id, second.id);
    }

    #[test]
    fn test_trades_attributed_to_selected_account_only() {
        let mut store = test_store();
        let first_id = store.selected_account().unwrap().id.clone();
        store.add_trade(long_trade_input(100.0, 110.0, 2.0)).unwrap();

        let second = store
            .add_account(CreateAccountInput {
                name: "Prop Firm".to_string(),
                initial_balance: 50_000.0,
            })
            .unwrap();
        store.switch_account(&second.id).unwrap();
        store.add_trade(long_trade_input(100.0, 90.0, 1.0)).unwrap();

        assert_eq!(store.get_account_trades().len(), 1);
        assert_eq!(store.account(&first_id).unwrap().trades.len(), 1);
        assert_eq!(
            store.account(&second.id).unwrap().current_balance,
            50_000.0 - 10.0
        );
        assert_balance_invariant(&store);
    }

    #[test]
    fn test_update_trade_in_background_account() {
        let mut store = test_store();
        let first_id = store.selected_account().unwrap().id.clone();
        let trade = store.add_trade(long_trade_input(100.0, 110.0, 2.0)).unwrap();

        let second = store
            .add_account(CreateAccountInput {
                name: "Prop Firm".to_string(),
                initial_balance: 50_000.0,
            })
            .unwrap();
        store.switch_account(&second.id).unwrap();

        // The owning account is adjusted even when it is not selected.
        store
            .update_trade(
                &trade.id,
                TradeUpdate {
                    exit_price: Some(130.0),
                    ..TradeUpdate::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(
            store.account(&first_id).unwrap().current_balance,
            DEFAULT_ACCOUNT_BALANCE + 60.0
        );
        assert_balance_invariant(&store);
    }

    #[test]
    fn test_delete_account_reassigns_selection_and_keeps_trades() {
        let mut store = test_store();
        let first_id = store.selected_account().unwrap().id.clone();
        store.add_trade(long_trade_input(100.0, 110.0, 2.0)).unwrap();
        let second = store
            .add_account(CreateAccountInput {
                name: "Prop Firm".to_string(),
                initial_balance: 50_000.0,
            })
            .unwrap();

        assert!(store.delete_account(&first_id).unwrap());
        assert_eq!(store.selected_account().unwrap().id, second.id);
        // Orphaned trades stay reachable through the global collection.
        assert_eq!(store.trades().len(), 1);
        assert!(store.get_account_trades().is_empty());
    }

    #[test]
    fn test_delete_last_account_clears_selection() {
        let mut store = test_store();
        let id = store.selected_account().unwrap().id.clone();

        assert!(store.delete_account(&id).unwrap());
        assert!(store.selected_account().is_none());
        assert!(store.get_account_trades().is_empty());
    }

    #[test]
    fn test_update_account_balance_preserves_pnl() {
        let mut store = test_store();
        let id = store.selected_account().unwrap().id.clone();
        store.add_trade(long_trade_input(100.0, 110.0, 2.0)).unwrap();

        assert!(store.update_account_balance(&id, 5_000.0).unwrap());
        let account = store.selected_account().unwrap();
        assert_eq!(account.initial_balance, 5_000.0);
        assert_eq!(account.current_balance, 5_020.0);
        assert_balance_invariant(&store);
    }

    #[test]
    fn test_custom_pair_dedup() {
        let mut store = test_store();
        assert!(store.add_custom_pair("XAUUSD").unwrap());
        assert!(!store.add_custom_pair("XAUUSD").unwrap());
        assert_eq!(store.custom_pairs(), ["XAUUSD".to_string()]);
    }

    #[test]
    fn test_state_survives_reload() {
        let storage = StorageHandle::new(MemoryStorage::new());
        let trade_id = {
            let mut store = TradeStore::load(storage.clone()).unwrap();
            store
                .add_trade(long_trade_input(100.0, 110.0, 2.0))
                .unwrap()
                .id
        };

        let store = TradeStore::load(storage).unwrap();
        assert_eq!(store.trades().len(), 1);
        assert_eq!(store.get_account_trades()[0].id, trade_id);
        assert_eq!(
            store.selected_account().unwrap().current_balance,
            DEFAULT_ACCOUNT_BALANCE + 20.0
        );
        assert_balance_invariant(&store);
    }

    #[test]
    fn test_balance_invariant_under_random_operations() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = test_store();
        let mut ids: Vec<String> = Vec::new();

        for _ in 0..200 {
            match rng.gen_range(0..3) {
                0 => {
                    let entry = rng.gen_range(50.0..150.0);
                    let exit = rng.gen_range(50.0..150.0);
                    let size = rng.gen_range(0.5..5.0);
                    let trade = store.add_trade(long_trade_input(entry, exit, size)).unwrap();
                    ids.push(trade.id);
                }
                1 if !ids.is_empty() => {
                    let id = ids[rng.gen_range(0..ids.len())].clone();
                    store
                        .update_trade(
                            &id,
                            TradeUpdate {
                                exit_price: Some(rng.gen_range(50.0..150.0)),
                                ..TradeUpdate::default()
                            },
                        )
                        .unwrap();
                }
                2 if !ids.is_empty() => {
                    let id = ids.swap_remove(rng.gen_range(0..ids.len()));
                    store.delete_trade(&id).unwrap();
                }
                _ => {}
            }
            assert_balance_invariant(&store);
        }

        let net = calculate_net_pnl(&store.get_account_trades());
        let account = store.selected_account().unwrap();
        assert!((account.current_balance - (account.initial_balance + net)).abs() < 1e-6);
    }
}
