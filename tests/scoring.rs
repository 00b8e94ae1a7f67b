//! Hand scoring and deck properties.

use bjtable::hand::{is_soft, score};
use bjtable::{Card, DECK_SIZE, Deck, DeckError, Rank, RoundPhase, Session, Suit, TableOptions};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

fn arb_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len()).prop_map(|(r, s)| Card::new(Rank::ALL[r], Suit::ALL[s]))
}

/// Best total reachable by counting each ace as 1 or 11 independently.
fn best_total(cards: &[Card]) -> u16 {
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u16;
    let hard: u16 = cards.iter().map(|c| if c.is_ace() { 1 } else { c.value() }).sum();
    (0..=aces)
        .rev()
        .map(|soft| hard + 10 * soft)
        .find(|&total| total <= 21)
        .unwrap_or(hard)
}

#[test]
fn pair_of_aces_is_12() {
    assert_eq!(score(&[card(Rank::Ace), card(Rank::Ace)]), 12);
}

#[test]
fn ace_and_ten_is_21() {
    assert_eq!(score(&[card(Rank::Ten), card(Rank::Ace)]), 21);
    assert_eq!(score(&[card(Rank::King), card(Rank::Ace)]), 21);
}

#[test]
fn aces_reduce_one_at_a_time() {
    let hand = [card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)];
    assert_eq!(score(&hand), 21);
    assert!(is_soft(&hand));

    let hand = [card(Rank::Ace), card(Rank::Ace), card(Rank::Nine), card(Rank::Ten)];
    assert_eq!(score(&hand), 21);
    assert!(!is_soft(&hand));

    let hand = [card(Rank::King), card(Rank::Queen), card(Rank::Ace), card(Rank::Ace)];
    assert_eq!(score(&hand), 22);
}

#[test]
fn face_cards_count_ten() {
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(rank.value(), 10);
    }
    assert_eq!(score(&[]), 0);
}

#[test]
fn shuffled_deck_is_a_permutation_of_52_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::shuffled(&mut rng);
    assert_eq!(deck.remaining(), DECK_SIZE);

    let mut seen = Vec::with_capacity(DECK_SIZE);
    while let Ok(card) = deck.deal() {
        assert!(!seen.contains(&card), "{card} dealt twice");
        seen.push(card);
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.deal(), Err(DeckError::Empty));
}

proptest! {
    #[test]
    fn score_matches_best_ace_assignment(cards in prop::collection::vec(arb_card(), 0..12)) {
        prop_assert_eq!(score(&cards), best_total(&cards));
    }

    #[test]
    fn reducible_hands_never_bust(cards in prop::collection::vec(arb_card(), 0..12)) {
        let hard: u16 = cards.iter().map(|c| if c.is_ace() { 1 } else { c.value() }).sum();
        if hard <= 21 {
            prop_assert!(score(&cards) <= 21);
        } else {
            prop_assert_eq!(score(&cards), hard);
            prop_assert!(!is_soft(&cards));
        }
    }

    #[test]
    fn cards_are_conserved_and_turns_only_move_forward(
        seed in any::<u64>(),
        players in 1usize..6,
        moves in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        let mut session = Session::new(TableOptions::default(), seed);
        session.start_round(names).unwrap();

        let in_play = |s: &Session| {
            s.players().iter().map(|p| p.hand().len()).sum::<usize>()
                + s.dealer().hand().len()
                + s.deck().remaining()
        };
        prop_assert_eq!(in_play(&session), DECK_SIZE);

        let mut last_index = session.active_player_index();
        for hit in moves {
            if session.phase() != RoundPhase::PlayerTurns {
                break;
            }
            let seat = session.active_player_index();
            if hit {
                session.hit().unwrap();
            } else {
                session.stand().unwrap();
            }

            let index = session.active_player_index();
            prop_assert!(index >= last_index);
            if index > seat {
                prop_assert!(session.players()[seat].is_stopped());
            }
            last_index = index;
            prop_assert_eq!(in_play(&session), DECK_SIZE);
        }

        while session.phase() == RoundPhase::PlayerTurns {
            session.stand().unwrap();
        }
        let result = session.resolve_dealer_turn().unwrap();
        prop_assert_eq!(in_play(&session), DECK_SIZE);
        prop_assert!(result.dealer_score >= 17);
    }
}
