//! Shared table tests.

use std::sync::Arc;
use std::thread;

use bjtable::{
    Card, DEALER_NAME, Deck, RESET_MESSAGE, Rank, Session, Suit, Table, TableOptions,
};
use serde_json::json;

fn stacked_table(names: &[&str], ranks: &[Rank]) -> Table {
    let deck = Deck::stacked(
        ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| Card::new(rank, Suit::ALL[i % 4])),
    );
    let mut session = Session::new(TableOptions::default(), 1);
    session
        .start_round_with_deck(names.iter().copied(), deck)
        .unwrap();
    Table::from_session(session)
}

#[test]
fn place_bet_confirms_with_message_and_view() {
    let table = Table::new(TableOptions::default(), 4);
    table.start_round(["Ann"]).unwrap();

    let confirmation = table.place_bet("Ann", 250).unwrap();
    assert_eq!(confirmation.message, "Bet of 250 placed for Ann.");
    assert_eq!(confirmation.view.players[0].current_bet, 250);
    assert!(table.place_bet("Nobody", 1).is_err());
}

#[test]
fn full_round_through_the_table() {
    use Rank::{Eight, Nine, Seven, Six, Ten};

    let table = stacked_table(&["Ann", "Bo"], &[Ten, Ten, Ten, Nine, Six, Seven, Eight]);
    table.place_bet("Ann", 100).unwrap();
    table.place_bet("Bo", 40).unwrap();

    table.stand().unwrap();
    let (card, view) = table.hit().unwrap();
    assert_eq!(card.rank, Eight);
    assert_eq!(view.players[1].score, 24);
    assert_eq!(view.current_turn, DEALER_NAME);

    let view = table.resolve_dealer_turn().unwrap();
    assert!(view.round_over);
    assert_eq!(view.players[0].bankroll, 20_100);
    assert_eq!(view.players[1].bankroll, 19_960);
    assert!(table.resolve_dealer_turn().is_err());

    assert_eq!(table.reset(), RESET_MESSAGE);
    let view = table.current_view();
    assert!(!view.round_over);
    assert_eq!(view.players[0].bankroll, 20_100);
    assert!(view.players[0].hand.is_empty());
    assert_eq!(table.inspect(|s| s.deck().remaining()), 52);

    let view = table.next_round().unwrap();
    assert_eq!(view.players[1].hand.len(), 2);
    assert_eq!(view.players[1].bankroll, 19_960);
}

#[test]
fn view_serializes_with_face_down_sentinel() {
    use Rank::{Eight, Nine, Seven, Ten};

    let table = stacked_table(&["Ann"], &[Ten, Nine, Eight, Seven]);
    let value = serde_json::to_value(table.current_view()).unwrap();

    assert_eq!(value["currentTurn"], json!("Ann"));
    assert_eq!(value["roundOver"], json!(false));
    assert_eq!(value["dealer"]["hand"][0], json!({"rank": "9", "suit": "diamonds"}));
    assert_eq!(value["dealer"]["hand"][1], json!({"rank": "back", "suit": "back"}));
    assert_eq!(value["dealer"]["score"], json!(16));
    assert_eq!(value["players"][0]["hand"][0], json!({"rank": "10", "suit": "hearts"}));
    assert_eq!(value["players"][0]["currentBet"], json!(0));
    assert_eq!(value["players"][0]["stopped"], json!(false));
}

#[test]
fn history_and_confirmation_serialize() {
    use Rank::{Eight, Nine, Ten};

    let table = stacked_table(&["Ann"], &[Ten, Ten, Nine, Eight]);
    let confirmation = table.place_bet("Ann", 10).unwrap();
    let value = serde_json::to_value(&confirmation).unwrap();
    assert_eq!(value["message"], json!("Bet of 10 placed for Ann."));
    assert_eq!(value["players"][0]["name"], json!("Ann"));

    table.stand().unwrap();
    let view = table.resolve_dealer_turn().unwrap();
    let value = serde_json::to_value(view).unwrap();
    assert_eq!(
        value["players"][0]["roundHistory"][0],
        json!({"bet": 10, "result": "Won 10", "resultingBankroll": 20_010})
    );
}

#[test]
fn concurrent_bets_and_reads_are_serialized() {
    let names: Vec<String> = (0..8).map(|i| format!("P{i}")).collect();
    let table = Arc::new(Table::new(TableOptions::default(), 8));
    table.start_round(names.clone()).unwrap();

    let handles: Vec<_> = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let amount = (i as u64 + 1) * 10;
                for _ in 0..50 {
                    table.place_bet(&name, amount).unwrap();
                    let view = table.current_view();
                    assert_eq!(view.players.len(), 8);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let view = table.current_view();
    for (i, player) in view.players.iter().enumerate() {
        assert_eq!(player.current_bet, (i as u64 + 1) * 10);
    }
}
