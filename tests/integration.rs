//! Integration tests for the fair-split ledger.

use fairsplit::{
    Expense, ExpenseUpdate, JsonFileStorage, Participant, ParticipantUpdate, SplitStore,
    StateSnapshot,
};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

fn household_snapshot() -> StateSnapshot {
    StateSnapshot {
        participants: vec![
            Participant::new("A", 3000.0),
            Participant::new("B", 2000.0),
        ],
        expenses: vec![Expense::new("Rent", 1000.0)],
    }
}

// --- Realistic Workflow Tests ---

#[test]
fn test_household_editing_workflow() {
    init_tracing();
    let store = SplitStore::from_snapshot(household_snapshot());

    // Third roommate moves in.
    store.add_participant();
    store
        .update_participant(2, ParticipantUpdate::name("C").with_earning(5000.0))
        .unwrap();
    assert_eq!(store.total_earning(), 10000.0);

    // Add a grocery budget.
    store.add_expense();
    store
        .update_expense(1, ExpenseUpdate::name("Food").with_amount(600.0))
        .unwrap();

    // C earns half the total, so owes half of everything.
    assert_eq!(store.share_of(2).unwrap(), 50.0);
    assert_eq!(store.split_of(0, 2).unwrap(), 500.0);
    assert_eq!(store.split_of(1, 2).unwrap(), 300.0);

    // B moves out; C shifts down to index 1.
    store.remove_participant(1).unwrap();
    assert_eq!(store.participants()[1].name, "C");
    assert_eq!(store.total_earning(), 8000.0);
}

#[test]
fn test_persisted_session_round_trip() {
    init_tracing();
    let dir = TempDir::new().unwrap();

    // First session: open a fresh store, edit it.
    {
        let storage = Box::new(JsonFileStorage::open(dir.path()).unwrap());
        let store = SplitStore::open(storage).unwrap();
        store.reset();
        store
            .update_participant(0, ParticipantUpdate::name("Alice").with_earning(3200.0))
            .unwrap();
        store.add_participant();
        store
            .update_participant(1, ParticipantUpdate::name("Ben").with_earning(1800.0))
            .unwrap();
        store
            .update_expense(0, ExpenseUpdate::name("Rent").with_amount(1500.0))
            .unwrap();
    }

    // Second session: a fresh instance restores the same lists, in order.
    {
        let storage = Box::new(JsonFileStorage::open(dir.path()).unwrap());
        let store = SplitStore::open(storage).unwrap();

        let participants = store.participants();
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0], Participant::new("Alice", 3200.0));
        assert_eq!(participants[1], Participant::new("Ben", 1800.0));
        assert_eq!(store.expenses(), vec![Expense::new("Rent", 1500.0)]);
        assert_eq!(store.total_earning(), 5000.0);
    }
}

#[test]
fn test_first_run_seeds_and_persists_default() {
    let dir = TempDir::new().unwrap();

    let seeded = {
        let storage = Box::new(JsonFileStorage::open(dir.path()).unwrap());
        let store = SplitStore::open(storage).unwrap();
        assert_eq!(store.participant_count(), 2);
        assert_eq!(store.expense_count(), 3);
        store.snapshot()
    };

    // Reopening restores the seed instead of rolling new random values.
    let storage = Box::new(JsonFileStorage::open(dir.path()).unwrap());
    let store = SplitStore::open(storage).unwrap();
    assert_eq!(store.snapshot(), seeded);
}

// --- Spec Scenarios ---

#[test]
fn test_two_participant_allocation_scenario() {
    let store = SplitStore::from_snapshot(household_snapshot());

    assert_eq!(store.total_earning(), 5000.0);
    assert_eq!(store.share_of(0).unwrap(), 60.0);
    assert_eq!(store.share_of(1).unwrap(), 40.0);

    let split_a = store.split_of(0, 0).unwrap();
    let split_b = store.split_of(0, 1).unwrap();
    assert_eq!(split_a, 600.0);
    assert_eq!(split_b, 400.0);
    assert_eq!(split_a + split_b, 1000.0);
}

#[test]
fn test_empty_participant_list_scenario() {
    let store = SplitStore::from_snapshot(StateSnapshot {
        participants: vec![],
        expenses: vec![Expense::new("Rent", 1000.0)],
    });

    assert_eq!(store.total_earning(), 0.0);
    assert_eq!(fairsplit::share_percentage(0.0, store.total_earning()), 0.0);
    assert_eq!(
        fairsplit::expense_split(1000.0, store.total_earning(), 0.0),
        0.0
    );
}

#[test]
fn test_reset_scenario() {
    let store = SplitStore::from_snapshot(household_snapshot());
    store.reset();

    assert_eq!(store.participants(), vec![Participant::blank()]);
    assert_eq!(store.expenses(), vec![Expense::blank()]);
}

#[test]
fn test_remove_first_scenario() {
    let store = SplitStore::from_snapshot(StateSnapshot {
        participants: vec![
            Participant::new("A", 1.0),
            Participant::new("B", 2.0),
            Participant::new("C", 3.0),
        ],
        expenses: vec![],
    });

    store.remove_participant(0).unwrap();

    let names: Vec<_> = store.participants().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["B", "C"]);
}
