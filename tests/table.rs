//! Table session and ledger tests.

use pokernight::{
    Action, ActionError, ActionKind, Ledger, LedgerError, LedgerRow, LedgerStore, Roster,
    RosterError, SettleError, Street, Table, TableError, TableOptions,
};

fn roster(names: &[&str]) -> Roster {
    Roster::new(names.iter().copied()).unwrap()
}

fn row(entries: &[(&str, i64)]) -> LedgerRow {
    let mut row = LedgerRow::new();
    for (name, delta) in entries {
        row.push(*name, *delta);
    }
    row
}

/// Ledger whose writes can be made to fail.
struct FlakyStore {
    inner: Ledger,
    fail_writes: bool,
}

impl LedgerStore for FlakyStore {
    type Error = &'static str;

    fn players(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.inner.players().to_vec())
    }

    fn append(&mut self, row: &LedgerRow) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err("disk full");
        }
        self.inner.append(row).map_err(|_| "bad row")
    }

    fn rows(&self) -> Result<Vec<LedgerRow>, Self::Error> {
        self.inner.rows().map_err(|_| "unreadable")
    }
}

#[test]
fn roster_validation() {
    assert_eq!(
        Roster::new(["Ann"]).unwrap_err(),
        RosterError::TooFewPlayers
    );
    assert_eq!(
        Roster::new(["Ann", " "]).unwrap_err(),
        RosterError::BlankName
    );
    assert_eq!(
        Roster::new(["Ann", "Bob", "Ann"]).unwrap_err(),
        RosterError::DuplicateName
    );

    let seated = roster(&["Ann", "Bob", "Cid"]);
    assert_eq!(seated.len(), 3);
    assert_eq!(seated.seat_of("Cid"), Some(2));
    assert_eq!(seated.name(3), None);
    assert_eq!(
        seated.iter().collect::<Vec<_>>(),
        vec![(0, "Ann"), (1, "Bob"), (2, "Cid")]
    );
}

#[test]
fn ledger_players_can_join_and_leave() {
    let mut ledger = Ledger::with_players(["Ann", "Bob"]).unwrap();
    ledger.append(&row(&[("Ann", 10), ("Bob", -10)])).unwrap();

    ledger.add_player("Cid").unwrap();
    assert_eq!(ledger.history(), &[vec![10, -10, 0]]);
    assert_eq!(
        ledger.add_player("Cid"),
        Err(LedgerError::DuplicatePlayer("Cid".into()))
    );
    assert_eq!(ledger.add_player(""), Err(LedgerError::BlankName));

    ledger.remove_player("Ann").unwrap();
    assert_eq!(ledger.players(), &["Bob".to_string(), "Cid".to_string()]);
    assert_eq!(ledger.history(), &[vec![-10, 0]]);
    assert_eq!(
        ledger.remove_player("Ann"),
        Err(LedgerError::UnknownPlayer("Ann".into()))
    );
}

#[test]
fn ledger_append_fills_missing_players_and_rejects_unknown() {
    let mut ledger = Ledger::with_players(["Ann", "Bob", "Cid"]).unwrap();

    ledger.append(&row(&[("Cid", 7), ("Ann", -7)])).unwrap();
    assert_eq!(ledger.history(), &[vec![-7, 0, 7]]);

    assert_eq!(
        ledger.append(&row(&[("Ann", 1), ("Dan", -1)])),
        Err(LedgerError::UnknownPlayer("Dan".into()))
    );
    assert_eq!(
        ledger.append(&row(&[("Ann", 1), ("Ann", -1)])),
        Err(LedgerError::DuplicatePlayer("Ann".into()))
    );
    assert_eq!(ledger.len(), 1);

    let rows = ledger.rows().unwrap();
    assert_eq!(rows[0].get("Bob"), Some(0));
    assert_eq!(rows[0].total(), 0);
}

#[test]
fn ledger_load_drops_empty_rows() {
    let ledger = Ledger::from_rows(
        ["Ann", "Bob"],
        vec![
            vec![Some(5), Some(-5)],
            vec![None, None],
            vec![Some(0), Some(0)],
            vec![None, Some(3)],
        ],
    )
    .unwrap();

    assert_eq!(ledger.history(), &[vec![5, -5], vec![0, 3]]);
    assert_eq!(ledger.cumulative(), vec![vec![5, -5], vec![5, -2]]);
    assert_eq!(ledger.totals(), row(&[("Ann", 5), ("Bob", -2)]));
    assert_eq!(ledger.total_for("Bob"), Some(-2));
    assert_eq!(ledger.total_for("Cid"), None);

    assert_eq!(
        Ledger::from_rows(["Ann", "Bob"], vec![vec![Some(1)]]),
        Err(LedgerError::RowWidth {
            row: 0,
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn ledger_sums_saturate_instead_of_overflowing() {
    let ledger = Ledger::from_rows(
        ["Ann", "Bob"],
        vec![
            vec![Some(i64::MAX), Some(i64::MIN)],
            vec![Some(1), Some(-1)],
        ],
    )
    .unwrap();

    assert_eq!(
        ledger.cumulative(),
        vec![vec![i64::MAX, i64::MIN], vec![i64::MAX, i64::MIN]]
    );
    assert_eq!(ledger.totals(), row(&[("Ann", i64::MAX), ("Bob", i64::MIN)]));
    assert_eq!(ledger.total_for("Ann"), Some(i64::MAX));
    assert_eq!(ledger.total_for("Bob"), Some(i64::MIN));
    assert_eq!(row(&[("Ann", i64::MAX), ("Bob", 1)]).total(), i64::MAX);
}

#[test]
fn full_hand_is_committed_to_the_ledger() {
    let ledger = Ledger::with_players(["Ann", "Bob", "Cid", "Dee"]).unwrap();
    let table = Table::new(TableOptions::default(), ledger);

    table.start_hand(roster(&["Ann", "Bob", "Cid"])).unwrap();
    assert_eq!(table.street(), Some(Street::PreFlop));
    assert_eq!(table.current_player_name().as_deref(), Some("Ann"));

    for _ in 0..3 {
        table.submit_action(Action::Call).unwrap();
    }
    assert_eq!(table.street(), Some(Street::Flop));
    assert_eq!(table.current_player(), Some(0));

    table.submit_action(Action::Call).unwrap();
    table.submit_action(Action::Fold).unwrap();
    assert!(!table.is_hand_over());
    table.submit_action(Action::Fold).unwrap();
    assert!(table.is_hand_over());

    let payout = table.settle(0).unwrap();
    assert_eq!(payout.deltas, vec![20, -10, -10]);
    assert!(table.snapshot().is_none());
    assert!(table.pending_payout().is_none());

    let ledger = table.into_ledger();
    assert_eq!(ledger.history(), &[vec![20, -10, -10, 0]]);
}

#[test]
fn pending_action_flow_through_table() {
    let ledger = Ledger::with_players(["Ann", "Bob"]).unwrap();
    let table = Table::new(TableOptions::default(), ledger);
    table.start_hand(roster(&["Ann", "Bob"])).unwrap();

    table.select_action(ActionKind::Raise).unwrap();
    table.set_raise_amount(40).unwrap();
    table.submit_pending().unwrap();

    let hand = table.snapshot().unwrap();
    assert_eq!(hand.bets(), &[40, 10]);
    assert_eq!(hand.last_raise(), 30);
    assert_eq!(table.current_player(), Some(1));

    table.advance_turn().unwrap();
    assert_eq!(table.current_player(), Some(0));
}

#[test]
fn table_rejects_out_of_order_calls() {
    let ledger = Ledger::with_players(["Ann", "Bob"]).unwrap();
    let table = Table::new(TableOptions::default(), ledger);

    assert_eq!(table.submit_action(Action::Call), Err(TableError::NoHand));
    assert_eq!(table.settle(0), Err(TableError::NoHand));
    assert!(!table.is_hand_over());
    assert_eq!(table.retry_commit(), Err(TableError::NothingToCommit));

    assert_eq!(
        table.start_hand(roster(&["Ann", "Zed"])),
        Err(TableError::UnknownPlayer("Zed".into()))
    );

    table.start_hand(roster(&["Bob", "Ann"])).unwrap();
    assert_eq!(
        table.start_hand(roster(&["Ann", "Bob"])),
        Err(TableError::HandInProgress)
    );
    assert_eq!(
        table.submit_action_for(1, Action::Call),
        Err(TableError::Action(ActionError::NotYourTurn))
    );
    assert_eq!(
        table.settle(0),
        Err(TableError::Settle(SettleError::HandInProgress))
    );
}

#[test]
fn explicit_opening_bets_must_cover_the_roster() {
    let ledger = Ledger::with_players(["Ann", "Bob", "Cid"]).unwrap();
    let table = Table::new(TableOptions::default(), ledger);

    assert!(matches!(
        table.start_hand_with_bets(roster(&["Ann", "Bob", "Cid"]), vec![1, 2]),
        Err(TableError::Hand(_))
    ));

    table
        .start_hand_with_bets(roster(&["Ann", "Bob", "Cid"]), vec![0, 2, 4])
        .unwrap();
    assert_eq!(table.snapshot().unwrap().current_bet(), 4);
}

#[test]
fn abandoned_hand_leaves_ledger_untouched() {
    let ledger = Ledger::with_players(["Ann", "Bob"]).unwrap();
    let table = Table::new(TableOptions::default(), ledger);

    table.start_hand(roster(&["Ann", "Bob"])).unwrap();
    table.submit_action(Action::Raise { to: 50 }).unwrap();

    let abandoned = table.abandon_hand().unwrap();
    assert_eq!(abandoned.pot(), 60);
    assert!(table.roster().is_none());
    assert!(table.abandon_hand().is_none());

    table.start_hand(roster(&["Ann", "Bob"])).unwrap();
    assert_eq!(table.snapshot().unwrap().pot(), 15);
    assert!(table.ledger.lock().is_empty());
}

#[test]
fn failed_commit_keeps_the_payout_for_retry() {
    let store = FlakyStore {
        inner: Ledger::with_players(["Ann", "Bob"]).unwrap(),
        fail_writes: true,
    };
    let table = Table::new(TableOptions::default(), store);

    table.start_hand(roster(&["Ann", "Bob"])).unwrap();
    table.submit_action(Action::Fold).unwrap();

    assert_eq!(table.settle(1), Err(TableError::Store("disk full")));
    let pending = table.pending_payout().unwrap();
    assert_eq!(pending.deltas, vec![-5, 5]);
    assert!(table.snapshot().is_none());
    assert_eq!(
        table.start_hand(roster(&["Ann", "Bob"])),
        Err(TableError::UncommittedPayout)
    );

    assert_eq!(table.retry_commit(), Err(TableError::Store("disk full")));
    table.ledger.lock().fail_writes = false;
    table.retry_commit().unwrap();

    assert!(table.pending_payout().is_none());
    assert_eq!(table.ledger.lock().inner.total_for("Bob"), Some(5));
    table.start_hand(roster(&["Ann", "Bob"])).unwrap();
}

#[test]
fn settle_and_abandon_from_two_threads_keep_rosters_apart() {
    const HANDS: usize = 300;

    let ledger = Ledger::with_players(["Ann", "Bob", "Cid", "Dee", "Eve"]).unwrap();
    let table = Table::new(TableOptions::default(), ledger);

    std::thread::scope(|scope| {
        let settler = scope.spawn(|| {
            for _ in 0..HANDS {
                loop {
                    match table.start_hand(roster(&["Ann", "Bob"])) {
                        Ok(()) => break,
                        Err(TableError::HandInProgress) => std::thread::yield_now(),
                        Err(err) => panic!("unexpected start error: {err}"),
                    }
                }
                table.submit_action(Action::Fold).unwrap();
                let payout = table.settle(1).unwrap();
                assert_eq!(payout.deltas, vec![-5, 5]);
            }
        });

        let abandoner = scope.spawn(|| {
            for _ in 0..HANDS {
                if table.start_hand(roster(&["Cid", "Dee", "Eve"])).is_ok() {
                    assert!(table.abandon_hand().is_some());
                }
                std::thread::yield_now();
            }
        });

        settler.join().unwrap();
        abandoner.join().unwrap();
    });

    assert!(table.pending_payout().is_none());
    assert!(table.snapshot().is_none());
    assert!(table.roster().is_none());

    let ledger = table.into_ledger();
    assert_eq!(ledger.len(), HANDS);
    let expected = i64::try_from(HANDS).unwrap() * 5;
    assert_eq!(
        ledger.totals(),
        row(&[
            ("Ann", -expected),
            ("Bob", expected),
            ("Cid", 0),
            ("Dee", 0),
            ("Eve", 0),
        ])
    );
}
