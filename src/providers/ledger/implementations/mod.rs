pub mod mock_provider;

pub use mock_provider::InMemoryLedgerProvider;
