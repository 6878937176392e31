//! Property-based tests for meld shapes and scoring monotonicity.

use proptest::prelude::*;

use crate::domain::melds::is_valid_meld;
use crate::domain::{calc_score, test_gens, test_prelude, Card, JokerId};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: any same-suit run of three or more melds, in any order.
    #[test]
    fn prop_runs_meld(run in test_gens::run()) {
        prop_assert!(is_valid_meld(&run));
    }

    /// Property: three or four cards of a rank meld.
    #[test]
    fn prop_sets_meld(set in test_gens::set()) {
        prop_assert!(is_valid_meld(&set));
    }

    /// Property: a joker spoils any selection.
    #[test]
    fn prop_jokers_spoil_melds(mut run in test_gens::run()) {
        run.push(Card::Joker(JokerId::One));
        prop_assert!(!is_valid_meld(&run));
    }

    /// Property: a run loses validity when an inner card is taken out.
    #[test]
    fn prop_gapped_runs_fail(run in test_gens::run()) {
        let mut gapped = run;
        gapped.sort();
        gapped.remove(gapped.len() / 2);
        prop_assert!(!is_valid_meld(&gapped));
    }

    /// Property: one more card in hand never lowers the score.
    #[test]
    fn prop_score_grows_with_hand(
        cards in test_gens::distinct_cards(10),
        dora in test_gens::card(),
    ) {
        let head = &cards[..cards.len() - 1];
        prop_assert!(calc_score(head, dora) <= calc_score(&cards, dora));
    }
}
