pub mod contract;
pub mod memory;
pub mod seed;

pub use contract::RecordStore;
pub use memory::InMemoryRecordStore;
