//! Battle resolution tests: attacker order, scoring, and substitutions.

use football_ccg::cards::{Card, Deck, Rank, Suit};
use football_ccg::core::{GameRng, MatchConfig, MatchError, Role};
use football_ccg::decisions::{AlwaysDecline, Prompt, ScriptedDecisions};
use football_ccg::events::{EventLog, MatchEvent, NullSink};
use football_ccg::rules::{attacker_for_battle, Match};
use proptest::prelude::*;

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Diamonds)
}

/// Build a deck whose cards come off in the given order.
fn stacked(mut popped: Vec<Card>) -> Deck {
    popped.reverse();
    Deck::from_cards(popped)
}

/// Deck for a 4-4-2 match: dealer lineup, non-dealer lineup, dealer subs,
/// non-dealer subs, then `rest`.
fn match_deck(
    dealer: [Rank; 11],
    non_dealer: [Rank; 11],
    dealer_subs: [Rank; 3],
    non_dealer_subs: [Rank; 3],
    rest: &[Rank],
) -> Deck {
    let cards = dealer
        .iter()
        .chain(non_dealer.iter())
        .chain(dealer_subs.iter())
        .chain(non_dealer_subs.iter())
        .chain(rest.iter())
        .map(|&r| card(r))
        .collect();
    stacked(cards)
}

// =============================================================================
// Attacker Assignment
// =============================================================================

#[test]
fn test_attacker_alternation_over_eleven_battles() {
    let expected = [
        Role::NonDealer,
        Role::NonDealer,
        Role::Dealer,
        Role::NonDealer,
        Role::Dealer,
        Role::NonDealer,
        Role::Dealer,
        Role::NonDealer,
        Role::Dealer,
        Role::NonDealer,
        Role::Dealer,
    ];
    for (i, role) in expected.iter().enumerate() {
        assert_eq!(attacker_for_battle(i + 1), *role, "battle {}", i + 1);
    }
}

#[test]
fn test_battle_started_events_follow_attacker_rule() {
    let mut game = Match::new(MatchConfig::default().with_seed(11)).unwrap();
    let mut log = EventLog::new();
    game.play_regulation(&mut AlwaysDecline, &mut log).unwrap();

    let attackers: Vec<(usize, Role)> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            MatchEvent::BattleStarted {
                battle, attacker, ..
            } => Some((*battle, *attacker)),
            _ => None,
        })
        .collect();

    assert_eq!(attackers.len(), 11);
    for (battle, attacker) in attackers {
        assert_eq!(attacker, attacker_for_battle(battle));
    }
}

proptest! {
    #[test]
    fn prop_attacker_parity_from_three(battle in 3usize..1000) {
        let expected = if battle % 2 == 1 { Role::Dealer } else { Role::NonDealer };
        prop_assert_eq!(attacker_for_battle(battle), expected);
    }
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_scoring_follows_card_values() {
    use Rank::*;
    // Battle 1: ND attacks 10 vs 7 -> ND. Battle 2: ND 2 vs A -> dealer.
    // Battle 3: dealer attacks K vs K -> nobody. Rest: all equal.
    let dealer = [Seven, Ace, King, Five, Five, Five, Five, Five, Five, Five, Five];
    let non_dealer = [Ten, Two, King, Five, Five, Five, Five, Five, Five, Five, Five];
    let deck = match_deck(dealer, non_dealer, [Two; 3], [Two; 3], &[]);

    let mut game = Match::with_deck(MatchConfig::default(), deck, GameRng::new(1)).unwrap();

    let first = game.play_battle(&mut AlwaysDecline, &mut NullSink).unwrap().unwrap();
    assert_eq!(first.winner, Some(Role::NonDealer));
    assert_eq!((first.attacker_card.value(), first.defender_card.value()), (10, 7));

    let second = game.play_battle(&mut AlwaysDecline, &mut NullSink).unwrap().unwrap();
    assert_eq!(second.winner, Some(Role::Dealer));

    let third = game.play_battle(&mut AlwaysDecline, &mut NullSink).unwrap().unwrap();
    assert_eq!(third.attacker, Role::Dealer);
    assert_eq!(third.winner, None);

    assert_eq!(game.score().non_dealer, 1);
    assert_eq!(game.score().dealer, 1);
}

#[test]
fn test_battle_event_sequence() {
    use Rank::*;
    let deck = match_deck([Seven; 11], [Ten; 11], [Two; 3], [Ace; 3], &[]);
    let mut game = Match::with_deck(MatchConfig::default(), deck, GameRng::new(1)).unwrap();
    let mut log = EventLog::new();

    game.play_battle(&mut AlwaysDecline, &mut log).unwrap();

    let kinds: Vec<&str> = log.events().iter().map(MatchEvent::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "kick_off",
            "battle_started",
            "card_revealed",
            "substitution_offered",
            "card_locked_in",
            "card_revealed",
            "battle_resolved",
            "score_update",
        ]
    );
}

// =============================================================================
// Substitutions
// =============================================================================

#[test]
fn test_declining_keeps_lineup_card() {
    use Rank::*;
    let deck = match_deck([Nine; 11], [Three; 11], [Two; 3], [Ace, King, Queen], &[]);
    let mut game = Match::with_deck(MatchConfig::default(), deck, GameRng::new(1)).unwrap();
    let mut decisions = ScriptedDecisions::new().with_answers([false]);

    let outcome = game.play_battle(&mut decisions, &mut NullSink).unwrap().unwrap();

    assert_eq!(outcome.substitutions, 0);
    assert_eq!(outcome.attacker_card, card(Three));
    assert_eq!(outcome.winner, Some(Role::Dealer));
    assert_eq!(game.player(Role::NonDealer).substitutes_remaining(), 3);
    assert_eq!(
        decisions.asked(),
        &[Prompt::UseSubstitute {
            role: Role::NonDealer,
            battle: 1,
        }]
    );
}

#[test]
fn test_accepting_swaps_in_a_substitute() {
    let subs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Hearts),
    ];
    let mut cards: Vec<Card> = Vec::new();
    cards.extend([card(Rank::Nine); 11]);
    cards.extend([card(Rank::Three); 11]);
    cards.extend([card(Rank::Two); 3]);
    cards.extend(subs);
    let deck = stacked(cards);

    let mut game = Match::with_deck(MatchConfig::default(), deck, GameRng::new(1)).unwrap();
    let mut decisions = ScriptedDecisions::new().with_answers([true]);
    let mut log = EventLog::new();

    let outcome = game.play_battle(&mut decisions, &mut log).unwrap().unwrap();

    let player = game.player(Role::NonDealer);
    assert_eq!(outcome.substitutions, 1);
    assert_eq!(player.substitutes_remaining(), 2);
    assert!(subs.contains(&player.lineup[0]));
    assert!(!player.substitutes.contains(&player.lineup[0]));
    assert_eq!(outcome.attacker_card, player.lineup[0]);
    assert_eq!(outcome.winner, Some(Role::NonDealer));

    // The replaced card is gone for good.
    assert!(!player.substitutes.contains(&card(Rank::Three)));
    let applied: Vec<&MatchEvent> = log.of_kind("substitution_applied").collect();
    assert_eq!(applied.len(), 1);
    assert!(matches!(
        applied[0],
        MatchEvent::SubstitutionApplied { discarded, remaining: 2, .. }
            if *discarded == card(Rank::Three)
    ));
}

#[test]
fn test_one_substitute_per_battle_before_final() {
    use Rank::*;
    let deck = match_deck([Nine; 11], [Three; 11], [Two; 3], [Ace; 3], &[]);
    let mut game = Match::with_deck(MatchConfig::default(), deck, GameRng::new(1)).unwrap();
    let mut decisions = ScriptedDecisions::new().with_answers([true, true]);

    game.play_battle(&mut decisions, &mut NullSink).unwrap();
    game.play_battle(&mut decisions, &mut NullSink).unwrap();

    assert_eq!(game.player(Role::NonDealer).substitutes_remaining(), 1);
    assert!(decisions
        .asked()
        .iter()
        .all(|p| matches!(p, Prompt::UseSubstitute { .. })));
}

#[test]
fn test_final_battle_offers_all_remaining() {
    use Rank::*;
    let deck = match_deck([Nine; 11], [Three; 11], [Ace; 3], [Two; 3], &[]);
    let mut game = Match::with_deck(MatchConfig::default(), deck, GameRng::new(1)).unwrap();

    // Battles 1..10 declined; battle 11 is the dealer's attack.
    for _ in 0..10 {
        game.play_battle(&mut AlwaysDecline, &mut NullSink).unwrap();
    }
    let mut decisions = ScriptedDecisions::new().with_answers([true]).with_counts([2]);
    let outcome = game.play_battle(&mut decisions, &mut NullSink).unwrap().unwrap();

    assert_eq!(outcome.attacker, Role::Dealer);
    assert_eq!(outcome.substitutions, 2);
    assert_eq!(game.player(Role::Dealer).substitutes_remaining(), 1);
    assert_eq!(outcome.attacker_card, card(Ace));
    assert_eq!(
        decisions.asked(),
        &[
            Prompt::FinalBattleSubstitutes {
                role: Role::Dealer,
                max_allowed: 3,
            },
            Prompt::SubstituteCount {
                role: Role::Dealer,
                min: 1,
                max: 3,
            },
        ]
    );
}

#[test]
fn test_final_battle_count_over_pool_is_an_error() {
    use Rank::*;
    let deck = match_deck([Nine; 11], [Three; 11], [Ace; 3], [Two; 3], &[]);
    let mut game = Match::with_deck(MatchConfig::default(), deck, GameRng::new(1)).unwrap();
    for _ in 0..10 {
        game.play_battle(&mut AlwaysDecline, &mut NullSink).unwrap();
    }

    let mut decisions = ScriptedDecisions::new().with_answers([true]).with_counts([4]);
    let err = game.play_battle(&mut decisions, &mut NullSink).unwrap_err();

    assert_eq!(
        err,
        MatchError::InvalidSubstitutionCount {
            requested: 4,
            available: 3,
        }
    );
    assert!(!err.is_recoverable());
}

#[test]
fn test_substitute_picks_are_seeded() {
    let run = |seed: u64| {
        let mut game = Match::new(MatchConfig::default().with_seed(seed)).unwrap();
        let mut decisions = ScriptedDecisions::new().with_answers([true; 11]).with_counts([3]);
        game.play_regulation(&mut decisions, &mut NullSink).unwrap();
        game.players().map(|p| p.lineup.clone())
    };

    assert_eq!(run(99), run(99));
}
