pub mod jsonl;
pub mod memory;
pub mod positional;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod traits;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
pub use positional::PositionalMemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
pub use traits::RecordStore;
