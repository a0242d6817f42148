//! The ledger store: ordered participant and expense lists plus the mutation
//! contract that keeps the persisted snapshot in sync.

use crate::allocation;
use crate::error::{Result, SplitError};
use crate::storage::{SnapshotStorage, STORAGE_KEY};
use crate::types::{
    Expense, ExpenseUpdate, ListKind, Participant, ParticipantUpdate, StateSnapshot,
};
use parking_lot::RwLock;
use rand::seq::SliceRandom;
use rand::Rng;

/// Placeholder names for the seeded default state.
const SEED_NAMES: &[&str] = &["Bob", "Charlie", "Diana", "Eve", "Frank", "Grace"];

/// Earning range for seeded participants: `[SEED_EARNING_MIN, SEED_EARNING_MIN + SEED_EARNING_SPAN)`.
const SEED_EARNING_MIN: u32 = 1_000;
const SEED_EARNING_SPAN: u32 = 5_000;

/// Build the randomized first-run state: two placeholder participants and
/// three named expenses with fixed amounts.
fn seeded_snapshot() -> StateSnapshot {
    let mut rng = rand::thread_rng();
    let seed_participant = |rng: &mut rand::rngs::ThreadRng| {
        let name = *SEED_NAMES.choose(rng).unwrap_or(&SEED_NAMES[0]);
        let earning = f64::from(rng.gen_range(0..SEED_EARNING_SPAN) + SEED_EARNING_MIN);
        Participant::new(name, earning)
    };

    StateSnapshot {
        participants: vec![seed_participant(&mut rng), seed_participant(&mut rng)],
        expenses: vec![
            Expense::new("Rent", 1400.0),
            Expense::new("Food", 600.0),
            Expense::new("Entertainment", 200.0),
        ],
    }
}

/// The editable fair-split ledger.
///
/// An explicit, constructed object: callers hold a reference (or an `Arc`) and
/// pass it to whichever layer needs it, there is no ambient global instance.
/// Persistence is an injected [`SnapshotStorage`] collaborator; after every
/// mutation the full snapshot is saved under [`STORAGE_KEY`] before the call
/// returns, so the next read through the storage observes the new state.
///
/// The derived total earning is recomputed from the list on every read, never
/// cached. Index-addressed operations on a bad index return
/// [`SplitError::IndexOutOfRange`] rather than panicking.
pub struct SplitStore {
    state: RwLock<StateSnapshot>,
    storage: Option<Box<dyn SnapshotStorage>>,
}

impl SplitStore {
    /// A seeded store with no persistence. Edits work normally but are lost
    /// when the store is dropped.
    pub fn in_memory() -> Self {
        let state = seeded_snapshot();
        tracing::debug!(
            participants = state.participants.len(),
            expenses = state.expenses.len(),
            "Seeded in-memory ledger"
        );
        Self {
            state: RwLock::new(state),
            storage: None,
        }
    }

    /// A store over an explicit snapshot, no persistence.
    pub fn from_snapshot(snapshot: StateSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            storage: None,
        }
    }

    /// Open a persisted store: restore the snapshot under [`STORAGE_KEY`] if
    /// one exists, otherwise seed the randomized default and save it.
    pub fn open(storage: Box<dyn SnapshotStorage>) -> Result<Self> {
        let state = match storage.load(STORAGE_KEY)? {
            Some(snapshot) => {
                tracing::debug!(
                    participants = snapshot.participants.len(),
                    expenses = snapshot.expenses.len(),
                    "Restored ledger from storage"
                );
                snapshot
            }
            None => {
                let seeded = seeded_snapshot();
                storage.save(STORAGE_KEY, &seeded)?;
                tracing::debug!("No snapshot found, seeded default ledger");
                seeded
            }
        };

        Ok(Self {
            state: RwLock::new(state),
            storage: Some(storage),
        })
    }

    // --- Participant operations ---

    /// Append a blank participant to the end of the list.
    pub fn add_participant(&self) {
        self.state.write().participants.push(Participant::blank());
        self.persist();
    }

    /// Merge the set fields of `update` into the participant at `index`.
    pub fn update_participant(&self, index: usize, update: ParticipantUpdate) -> Result<()> {
        {
            let mut state = self.state.write();
            let len = state.participants.len();
            let participant = state.participants.get_mut(index).ok_or(
                SplitError::IndexOutOfRange {
                    list: ListKind::Participants,
                    index,
                    len,
                },
            )?;
            update.apply(participant);
        }
        self.persist();
        Ok(())
    }

    /// Delete the participant at `index`; later entries shift left by one.
    /// The list may become empty.
    pub fn remove_participant(&self, index: usize) -> Result<()> {
        {
            let mut state = self.state.write();
            let len = state.participants.len();
            if index >= len {
                return Err(SplitError::IndexOutOfRange {
                    list: ListKind::Participants,
                    index,
                    len,
                });
            }
            state.participants.remove(index);
        }
        self.persist();
        Ok(())
    }

    // --- Expense operations ---

    /// Append a blank expense to the end of the list.
    pub fn add_expense(&self) {
        self.state.write().expenses.push(Expense::blank());
        self.persist();
    }

    /// Merge the set fields of `update` into the expense at `index`.
    pub fn update_expense(&self, index: usize, update: ExpenseUpdate) -> Result<()> {
        {
            let mut state = self.state.write();
            let len = state.expenses.len();
            let expense =
                state
                    .expenses
                    .get_mut(index)
                    .ok_or(SplitError::IndexOutOfRange {
                        list: ListKind::Expenses,
                        index,
                        len,
                    })?;
            update.apply(expense);
        }
        self.persist();
        Ok(())
    }

    /// Delete the expense at `index`; later entries shift left by one.
    pub fn remove_expense(&self, index: usize) -> Result<()> {
        {
            let mut state = self.state.write();
            let len = state.expenses.len();
            if index >= len {
                return Err(SplitError::IndexOutOfRange {
                    list: ListKind::Expenses,
                    index,
                    len,
                });
            }
            state.expenses.remove(index);
        }
        self.persist();
        Ok(())
    }

    /// Replace both lists with a single blank participant and a single blank
    /// expense. Destructive: this is not the randomized seed and there is no
    /// undo.
    pub fn reset(&self) {
        {
            let mut state = self.state.write();
            state.participants = vec![Participant::blank()];
            state.expenses = vec![Expense::blank()];
        }
        tracing::debug!("Ledger reset to blank entries");
        self.persist();
    }

    // --- Reads ---

    /// Sum of all participants' earnings, recomputed on every call.
    pub fn total_earning(&self) -> f64 {
        self.state
            .read()
            .participants
            .iter()
            .map(|p| p.earning)
            .sum()
    }

    pub fn participants(&self) -> Vec<Participant> {
        self.state.read().participants.clone()
    }

    pub fn expenses(&self) -> Vec<Expense> {
        self.state.read().expenses.clone()
    }

    pub fn participant_count(&self) -> usize {
        self.state.read().participants.len()
    }

    pub fn expense_count(&self) -> usize {
        self.state.read().expenses.len()
    }

    /// The current full state, cloned.
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.read().clone()
    }

    // --- Derived allocation reads ---

    /// Share percentage of the participant at `index` against the current
    /// total earning.
    pub fn share_of(&self, index: usize) -> Result<f64> {
        let state = self.state.read();
        let participant =
            state
                .participants
                .get(index)
                .ok_or(SplitError::IndexOutOfRange {
                    list: ListKind::Participants,
                    index,
                    len: state.participants.len(),
                })?;
        let total: f64 = state.participants.iter().map(|p| p.earning).sum();
        Ok(allocation::share_percentage(participant.earning, total))
    }

    /// Amount the participant at `participant_index` owes toward the expense
    /// at `expense_index`.
    pub fn split_of(&self, expense_index: usize, participant_index: usize) -> Result<f64> {
        let state = self.state.read();
        let expense = state
            .expenses
            .get(expense_index)
            .ok_or(SplitError::IndexOutOfRange {
                list: ListKind::Expenses,
                index: expense_index,
                len: state.expenses.len(),
            })?;
        let participant =
            state
                .participants
                .get(participant_index)
                .ok_or(SplitError::IndexOutOfRange {
                    list: ListKind::Participants,
                    index: participant_index,
                    len: state.participants.len(),
                })?;
        let total: f64 = state.participants.iter().map(|p| p.earning).sum();
        Ok(allocation::expense_split(
            expense.amount,
            total,
            participant.earning,
        ))
    }

    /// Save the current snapshot through the injected storage, if any.
    ///
    /// A save failure degrades durability, not the edit: the in-memory state
    /// already changed, so the failure is logged and swallowed.
    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        let snapshot = self.state.read().clone();
        if let Err(e) = storage.save(STORAGE_KEY, &snapshot) {
            tracing::warn!(error = %e, "Failed to persist ledger snapshot");
        }
    }
}
