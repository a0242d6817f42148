//! Core types for the fair-split ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person contributing proportionally to shared expenses.
///
/// Identified by position in the participant list; there is no separate id.
/// `earning` is whatever the user entered: zero, negative, and non-finite
/// values all flow through unvalidated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub earning: f64,
}

impl Participant {
    pub fn new(name: impl Into<String>, earning: f64) -> Self {
        Self {
            name: name.into(),
            earning,
        }
    }

    /// The blank entry appended by `add_participant` and used by `reset`.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            earning: 0.0,
        }
    }
}

/// A named cost to be split among participants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// The blank entry appended by `add_expense` and used by `reset`.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            amount: 0.0,
        }
    }
}

/// The persisted shape of the ledger: both ordered lists, nothing derived.
///
/// Insertion order is significant and preserved across every mutation except
/// removal, which shifts later indices down by one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
}

/// Which of the two lists an operation addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Participants,
    Expenses,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Participants => write!(f, "participants"),
            ListKind::Expenses => write!(f, "expenses"),
        }
    }
}

/// Field-wise update for a participant.
///
/// Each field is either "leave unchanged" (`None`) or "set to value" (`Some`),
/// replacing the structural partial-object merge of the original design.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticipantUpdate {
    pub name: Option<String>,
    pub earning: Option<f64>,
}

impl ParticipantUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn earning(earning: f64) -> Self {
        Self {
            earning: Some(earning),
            ..Default::default()
        }
    }

    pub fn with_earning(mut self, earning: f64) -> Self {
        self.earning = Some(earning);
        self
    }

    /// Apply the set fields, leaving the rest of the entry untouched.
    pub(crate) fn apply(self, participant: &mut Participant) {
        if let Some(name) = self.name {
            participant.name = name;
        }
        if let Some(earning) = self.earning {
            participant.earning = earning;
        }
    }
}

/// Field-wise update for an expense.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub name: Option<String>,
    pub amount: Option<f64>,
}

impl ExpenseUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn amount(amount: f64) -> Self {
        Self {
            amount: Some(amount),
            ..Default::default()
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub(crate) fn apply(self, expense: &mut Expense) {
        if let Some(name) = self.name {
            expense.name = name;
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
    }
}
