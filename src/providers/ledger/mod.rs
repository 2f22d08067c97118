pub mod implementations;
pub mod trait_ledger;

pub use implementations::InMemoryLedgerProvider;
pub use trait_ledger::LedgerProvider;
