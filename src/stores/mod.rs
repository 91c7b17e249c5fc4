pub mod goals;
pub mod journal;
pub mod trades;

pub use goals::GoalsStore;
pub use journal::JournalStore;
pub use trades::TradeStore;
