use crate::domain::fixtures::CardFixtures;
use crate::domain::scoring::{calc_score, dora_target};
use crate::domain::Rank;

fn score(hand: &[&str], dora: &str) -> u64 {
    calc_score(&CardFixtures::parse_hardcoded(hand), CardFixtures::card(dora))
}

#[test]
fn plain_ranks_sum() {
    assert_eq!(score(&["S02", "S03", "S04"], "S05"), 9);
    assert_eq!(score(&["H11", "H12", "H13"], "C02"), 36);
}

#[test]
fn sevens_and_jokers_have_fixed_points() {
    assert_eq!(score(&["S07"], "C02"), 50);
    assert_eq!(score(&["JO1"], "C02"), 100 * 5);
}

#[test]
fn each_ace_doubles() {
    assert_eq!(score(&["S01"], "C05"), 2);
    assert_eq!(score(&["S01", "H01", "D01"], "S05"), 24);
    assert_eq!(score(&["S01", "H01", "D01", "C01"], "S05"), 4 * 16);
}

#[test]
fn each_joker_multiplies_by_five() {
    assert_eq!(score(&["JO1", "JO2"], "C03"), 200 * 25);
    assert_eq!(score(&["JO1", "S01"], "C03"), 101 * 2 * 5);
}

#[test]
fn dora_doubles_the_next_rank() {
    assert_eq!(score(&["S06"], "H05"), 12);
    assert_eq!(score(&["S06", "H06"], "D05"), 12 * 4);
    // The dora rank itself does nothing.
    assert_eq!(score(&["S05"], "H05"), 5);
}

#[test]
fn dora_target_wraps_king_to_ace() {
    assert_eq!(dora_target(Rank::King), Rank::Ace);
    assert_eq!(dora_target(Rank::Queen), Rank::King);
    assert_eq!(dora_target(Rank::Ace), Rank::Two);
    // King dora: the ace doubles twice (ace bonus then dora bonus).
    assert_eq!(score(&["S01"], "H13"), 4);
}

#[test]
fn joker_dora_squares_when_hand_leads_with_joker() {
    assert_eq!(score(&["JO1", "S02", "S03"], "JO2"), 275_625);
}

#[test]
fn joker_dora_is_positional() {
    assert_eq!(score(&["S02", "S03", "JO1"], "JO2"), 525);
    assert_eq!(score(&["S02", "S03"], "JO1"), 5);
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(score(&[], "S05"), 0);
    assert_eq!(score(&[], "JO1"), 0);
}

#[test]
fn square_applies_after_every_multiplier() {
    let hand = [
        "JO1", "JO2", "S01", "H01", "D01", "C01", "S02", "H02", "D02", "C02",
    ];
    // base 208, x16 for aces, x25 for jokers, then squared
    assert_eq!(score(&hand, "JO2"), (208u64 * 16 * 25).pow(2));
}

#[test]
fn whole_catalog_in_hand() {
    let all: Vec<_> = crate::domain::Card::all().collect();
    // base 4 * 134 + 200 = 736, x16 aces, x25 jokers, x16 for the four twos
    let dora = CardFixtures::card("S01");
    assert_eq!(calc_score(&all, dora), 736 * 16 * 25 * 16);
}
