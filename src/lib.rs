//! # Fair Split
//!
//! Earnings-proportional expense splitting: an editable ledger of
//! participants and expenses, and a pure allocation engine deriving each
//! participant's share and per-expense split from it.
//!
//! ## Core Concepts
//!
//! - **Ledger**: Two ordered lists (participants, expenses) with
//!   index-addressed create/update/delete/reset operations
//! - **Total earning**: Sum of all earnings, recomputed on every read
//! - **Allocation**: Share percentages and money splits proportional to each
//!   participant's earning, with a defined zero-total policy
//! - **Persistence**: An injected snapshot storage written wholesale after
//!   every mutation
//!
//! ## Example
//!
//! ```ignore
//! use fairsplit::{JsonFileStorage, ParticipantUpdate, SplitStore};
//!
//! let storage = Box::new(JsonFileStorage::open("./ledger")?);
//! let store = SplitStore::open(storage)?;
//!
//! store.add_participant();
//! store.update_participant(0, ParticipantUpdate::name("Alice").with_earning(3000.0))?;
//!
//! let share = store.share_of(0)?;
//! ```

pub mod allocation;
pub mod error;
pub mod storage;
pub mod store;
pub mod types;

// Re-exports
pub use allocation::{expense_split, format_amount, round_to_cents, share_percentage};
pub use error::{Result, SplitError};
pub use storage::{JsonFileStorage, MemoryStorage, SnapshotStorage, STORAGE_KEY};
pub use store::SplitStore;
pub use types::{
    Expense, ExpenseUpdate, ListKind, Participant, ParticipantUpdate, StateSnapshot,
};
