//! In-memory reconciliation backend.
//!
//! Both pending collections sit behind one mutex, so a submission sees and mutates a consistent snapshot of both.
mod memory_store;
mod pending_queue;

pub use memory_store::{MemoryStore, PendingState};
pub use pending_queue::{PendingItem, PendingQueue};
