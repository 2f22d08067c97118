pub mod implementations;
pub mod trait_store;

pub use implementations::InMemoryRecordStore;
pub use trait_store::RecordStoreProvider;
