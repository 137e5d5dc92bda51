use pokernight::{
    Action, ActionKind, HandState, Ledger, Payout, Roster, Street, Table, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    table: Table<Ledger>,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(small_blind: u32, big_blind: u32) -> Self {
        Self {
            table: Table::new(options(small_blind, big_blind), Ledger::new()),
        }
    }

    /// Replaces the ledger with stored history. Empty cells count as zero.
    pub fn load_ledger(&mut self, players: Vec<String>, rows: JsValue) -> Result<(), JsValue> {
        self.require_idle()?;
        let rows: Vec<Vec<Option<i64>>> =
            serde_wasm_bindgen::from_value(rows).map_err(js_err)?;
        let ledger = Ledger::from_rows(players, rows).map_err(js_err)?;
        let options = self.table.options;
        self.table = Table::new(options, ledger);
        Ok(())
    }

    pub fn add_player(&self, name: String) -> Result<(), JsValue> {
        self.require_idle()?;
        self.table.ledger.lock().add_player(name).map_err(js_err)
    }

    pub fn remove_player(&self, name: &str) -> Result<(), JsValue> {
        self.require_idle()?;
        self.table.ledger.lock().remove_player(name).map_err(js_err)
    }

    pub fn start_hand(&self, names: Vec<String>) -> Result<(), JsValue> {
        let roster = Roster::new(names).map_err(js_err)?;
        self.table.start_hand(roster).map_err(js_err)
    }

    pub fn call(&self) -> Result<(), JsValue> {
        self.submit(Action::Call)
    }

    pub fn raise(&self, to: u32) -> Result<(), JsValue> {
        self.submit(Action::Raise { to: u64::from(to) })
    }

    pub fn fold(&self) -> Result<(), JsValue> {
        self.submit(Action::Fold)
    }

    pub fn select_action(&self, kind: &str) -> Result<(), JsValue> {
        let kind = match kind {
            "Call" => ActionKind::Call,
            "Raise" => ActionKind::Raise,
            "Fold" => ActionKind::Fold,
            _ => return Err(JsValue::from_str("unknown action kind")),
        };
        self.table.select_action(kind).map_err(js_err)
    }

    pub fn set_raise_amount(&self, amount: u32) -> Result<(), JsValue> {
        self.table
            .set_raise_amount(u64::from(amount))
            .map_err(js_err)
    }

    pub fn submit_pending(&self) -> Result<(), JsValue> {
        self.table.submit_pending().map(|_| ()).map_err(js_err)
    }

    pub fn advance_turn(&self) -> Result<(), JsValue> {
        self.table.advance_turn().map(|_| ()).map_err(js_err)
    }

    pub fn is_hand_over(&self) -> bool {
        self.table.is_hand_over()
    }

    pub fn settle(&self, winner: u32) -> Result<JsValue, JsValue> {
        let payout = self.table.settle(winner as usize).map_err(js_err)?;
        to_js_value(&JsPayout::from(payout))
    }

    pub fn retry_commit(&self) -> Result<(), JsValue> {
        self.table.retry_commit().map_err(js_err)
    }

    pub fn abandon_hand(&self) {
        self.table.abandon_hand();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let hand = self.table.snapshot();
        let players = self
            .table
            .roster()
            .map(|roster| roster.names().to_vec())
            .unwrap_or_default();

        let snapshot = Snapshot {
            players,
            hand: hand.as_ref().map(JsHand::from_hand),
            pending_payout: self.table.pending_payout().map(JsPayout::from),
        };

        to_js_value(&snapshot)
    }

    pub fn ledger(&self) -> Result<JsValue, JsValue> {
        let ledger = self.table.ledger.lock();
        let view = JsLedger {
            players: ledger.players().to_vec(),
            rows: ledger.history().to_vec(),
            cumulative: ledger.cumulative(),
            totals: ledger.totals().iter().map(|(_, total)| total).collect(),
        };
        drop(ledger);

        to_js_value(&view)
    }
}

impl WasmTable {
    fn submit(&self, action: Action) -> Result<(), JsValue> {
        self.table.submit_action(action).map(|_| ()).map_err(js_err)
    }

    fn require_idle(&self) -> Result<(), JsValue> {
        if self.table.snapshot().is_some() || self.table.pending_payout().is_some() {
            return Err(JsValue::from_str("a hand is in progress"));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Snapshot {
    players: Vec<String>,
    hand: Option<JsHand>,
    pending_payout: Option<JsPayout>,
}

#[derive(Serialize)]
struct JsHand {
    street: &'static str,
    round_index: u32,
    current_player: u32,
    current_bet: u64,
    bets: Vec<u64>,
    folds: Vec<u32>,
    pot: u64,
    last_raise: u64,
    pending_kind: &'static str,
    pending_raise_to: u64,
    hand_over: bool,
}

impl JsHand {
    fn from_hand(hand: &HandState) -> Self {
        let pending = hand.pending();
        Self {
            street: street_to_str(hand.street()),
            round_index: hand.round_index() as u32,
            current_player: hand.current_player() as u32,
            current_bet: hand.current_bet(),
            bets: hand.bets().to_vec(),
            folds: hand.folds().into_iter().map(|seat| seat as u32).collect(),
            pot: hand.pot(),
            last_raise: hand.last_raise(),
            pending_kind: kind_to_str(pending.kind),
            pending_raise_to: pending.raise_to,
            hand_over: hand.is_hand_over(),
        }
    }
}

#[derive(Serialize)]
struct JsPayout {
    winner: u32,
    pot: u64,
    deltas: Vec<i64>,
}

impl From<Payout> for JsPayout {
    fn from(payout: Payout) -> Self {
        Self {
            winner: payout.winner as u32,
            pot: payout.pot,
            deltas: payout.deltas,
        }
    }
}

#[derive(Serialize)]
struct JsLedger {
    players: Vec<String>,
    rows: Vec<Vec<i64>>,
    cumulative: Vec<Vec<i64>>,
    totals: Vec<i64>,
}

fn options(small_blind: u32, big_blind: u32) -> TableOptions {
    TableOptions::default()
        .with_small_blind(u64::from(small_blind))
        .with_big_blind(u64::from(big_blind))
}

fn street_to_str(street: Street) -> &'static str {
    match street {
        Street::PreFlop => "PreFlop",
        Street::Flop => "Flop",
        Street::Turn => "Turn",
        Street::River => "River",
        Street::End => "End",
    }
}

fn kind_to_str(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Call => "Call",
        ActionKind::Raise => "Raise",
        ActionKind::Fold => "Fold",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
