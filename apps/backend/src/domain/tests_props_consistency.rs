//! Property-based tests for table-wide invariants.
//! Sessions come from seeded self-play, so these cover what real turns produce.

use proptest::prelude::*;

use crate::domain::{test_gens, test_prelude, GameSession, Location, Phase, ALL_CARDS, CARD_COUNT};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every card sits in exactly one zone and nothing is lost.
    #[test]
    fn prop_cards_are_conserved(session in test_gens::played_session()) {
        let deck = session.deck();
        let mut total = deck.count_at(&Location::Stock)
            + deck.count_at(&Location::Dora)
            + deck.count_at(&Location::WaitingCalled)
            + deck.count_at(&Location::DiscardTop)
            + deck.count_at(&Location::Discard);
        for player in session.players() {
            total += deck.hand_len(player);
        }
        total += deck.melds().iter().map(|m| m.cards.len()).sum::<usize>();
        prop_assert_eq!(total, CARD_COUNT);
        prop_assert_eq!(deck.entries().count(), ALL_CARDS.len());
    }

    /// Property: between commands the table keeps one dora, no pending call
    /// and at most one discard top.
    #[test]
    fn prop_table_invariants_hold(session in test_gens::played_session()) {
        prop_assert!(session.deck().check_table_invariants(session.players()).is_ok());
        prop_assert!(session.current_player_index() < session.players().len());
    }

    /// Property: melds on the table are always legal melds with unique ids.
    #[test]
    fn prop_melds_on_table_are_valid(session in test_gens::played_session()) {
        let melds = session.deck().melds();
        let mut ids: Vec<_> = melds.iter().map(|m| m.meld_id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        prop_assert_eq!(ids.len(), melds.len());
        for meld in &melds {
            prop_assert!(crate::domain::validate_meld(&meld.cards).is_ok());
            prop_assert!(session.players().contains(&meld.owner));
        }
    }

    /// Property: a finished round names the current player, who holds nothing.
    #[test]
    fn prop_phase_matches_table(session in test_gens::played_session()) {
        match session.phase() {
            Phase::Finished { winner } => {
                prop_assert_eq!(&winner, session.current_player());
                prop_assert_eq!(session.deck().hand_len(&winner), 0);
            }
            Phase::Exhausted => prop_assert_eq!(session.deck().count_at(&Location::Stock), 0),
            Phase::InProgress => {
                prop_assert!(session.deck().hand_len(session.current_player()) > 0);
                prop_assert!(session.deck().count_at(&Location::Stock) > 0);
            }
        }
    }

    /// Property: the persisted JSON blob restores the same session.
    #[test]
    fn prop_session_json_restores(session in test_gens::played_session()) {
        let json = serde_json::to_string(&session).expect("serialize");
        let back: GameSession = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(back, session);
    }
}
