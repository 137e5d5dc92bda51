//! CLI poker night example.
//!
//! Plays hands at one table and keeps a running ledger. Player names are
//! taken from the command line (at least two), in seat order.

use std::io::{self, Write};

use pokernight::{Action, HandState, Ledger, Roster, Table, TableOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.len() < 2 {
        names = vec!["Ann".into(), "Bob".into(), "Cid".into()];
    }

    let ledger = match Ledger::with_players(names.iter().cloned()) {
        Ok(ledger) => ledger,
        Err(err) => {
            println!("Ledger error: {err}");
            return;
        }
    };
    let table = Table::new(TableOptions::default(), ledger);

    println!("Poker night CLI example (type 'q' to quit)");

    loop {
        let roster = match Roster::new(names.iter().cloned()) {
            Ok(roster) => roster,
            Err(err) => {
                println!("Roster error: {err}");
                return;
            }
        };
        if let Err(err) = table.start_hand(roster.clone()) {
            println!("Start error: {err}");
            return;
        }

        while !table.is_hand_over() {
            let Some(hand) = table.snapshot() else {
                break;
            };
            print_hand(&hand, &roster);

            let input = prompt_line("Action ([c]all, [r]aise <to>, [f]old): ");
            let mut parts = input.split_whitespace();
            let action = match parts.next() {
                Some("c" | "call" | "check") => Action::Call,
                Some("f" | "fold") => Action::Fold,
                Some("r" | "raise") => match parts.next().map(str::parse::<u64>) {
                    Some(Ok(to)) => Action::Raise { to },
                    _ => {
                        println!("Raise needs an amount, e.g. 'r 40'.");
                        continue;
                    }
                },
                Some("q" | "quit") => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = table.submit_action(action) {
                println!("Action error: {err}");
            }
        }

        let Some(hand) = table.snapshot() else {
            continue;
        };
        let winner = match hand.remaining_player() {
            Some(seat) => seat,
            None => prompt_winner(&hand, &roster),
        };

        match table.settle(winner) {
            Ok(payout) => {
                println!("\n{} wins a pot of {}.", roster.name(winner).unwrap_or("?"), payout.pot);
                print_totals(&table);
            }
            Err(err) => println!("Settle error: {err}"),
        }

        if prompt_line("Another hand? (y/n): ") != "y" {
            println!("Goodbye.");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_winner(hand: &HandState, roster: &Roster) -> usize {
    loop {
        let candidates: Vec<String> = roster
            .iter()
            .filter(|(seat, _)| !hand.is_folded(*seat))
            .map(|(seat, name)| format!("{seat}={name}"))
            .collect();
        let input = prompt_line(&format!("Winner seat ({}): ", candidates.join(", ")));
        match input.parse::<usize>() {
            Ok(seat) if seat < roster.len() && !hand.is_folded(seat) => return seat,
            _ => println!("Pick one of the listed seats."),
        }
    }
}

fn print_hand(hand: &HandState, roster: &Roster) {
    println!(
        "\n{} | standing bet {} | pot {}",
        hand.street(),
        hand.current_bet(),
        hand.pot()
    );
    for (seat, name) in roster.iter() {
        let marker = if seat == hand.current_player() { "*" } else { " " };
        let status = if hand.is_folded(seat) { "folded" } else { "" };
        println!(
            "{marker} {name:<10} bet {:>6} {status}",
            hand.bet(seat).unwrap_or(0)
        );
    }
}

fn print_totals(table: &Table<Ledger>) {
    let ledger = table.ledger.lock();
    println!("Cumulative earnings after {} hand(s):", ledger.len());
    for (name, total) in ledger.totals().iter() {
        println!("  {name:<10} {total:>+8}");
    }
}
