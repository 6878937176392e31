use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::fixtures::CardFixtures;
use crate::domain::{
    apply_command, round_result, Card, Command, CommandRequest, GameSession, GameTransition,
    Location, MeldAction, Phase, Placement, PlayerId,
};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

fn pid(s: &str) -> PlayerId {
    PlayerId::new(s)
}

fn roster(n: usize) -> Vec<PlayerId> {
    (0..n).map(|i| pid(&format!("p{i}"))).collect()
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

fn request(command: Command, actor: &str, cards: &[&str]) -> CommandRequest {
    CommandRequest::new(command, pid(actor), CardFixtures::parse_hardcoded(cards))
}

/// Build a session from explicit hands; `rest` receives every unlisted card.
fn session_with(
    hands: &[(&str, &[&str])],
    dora: &str,
    rest: Location,
    current: usize,
) -> GameSession {
    let mut placement = Placement::new();
    for card in Card::all() {
        placement.set_location(card, rest.clone());
    }
    placement.set_location(CardFixtures::card(dora), Location::Dora);
    for (player, tokens) in hands {
        for card in CardFixtures::parse_hardcoded(tokens) {
            placement.set_location(card, Location::hand(&pid(player)));
        }
    }
    let players = hands.iter().map(|(p, _)| pid(p)).collect();
    GameSession::from_parts(placement, players, current).unwrap()
}

fn kind(err: &DomainError) -> &ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn start_game_deals_a_fresh_round() {
    let players = roster(4);
    let outcome = apply_command(
        None,
        &players,
        &request(Command::StartGame, "p0", &[]),
        &mut rng(),
    )
    .unwrap();
    let session = outcome.session;
    let deck = session.deck();

    assert_eq!(session.current_player_index(), 0);
    assert_eq!(deck.hand_len(&players[0]), 8);
    for p in &players[1..] {
        assert_eq!(deck.hand_len(p), 7);
    }
    assert!(deck.dora().is_some());
    assert_eq!(deck.count_at(&Location::Stock), 24);
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(
        outcome.transitions,
        vec![
            GameTransition::GameStarted,
            GameTransition::TurnBecame { player_id: pid("p0") }
        ]
    );
}

#[test]
fn start_game_requires_seated_actor() {
    let err = apply_command(
        None,
        &roster(3),
        &request(Command::StartGame, "ghost", &[]),
        &mut rng(),
    )
    .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
}

#[test]
fn start_game_rejected_while_in_progress() {
    let players = roster(2);
    let started = apply_command(
        None,
        &players,
        &request(Command::StartGame, "p0", &[]),
        &mut rng(),
    )
    .unwrap();
    let err = apply_command(
        Some(&started.session),
        &players,
        &request(Command::StartGame, "p1", &[]),
        &mut rng(),
    )
    .unwrap_err();
    assert_eq!(kind(&err), &ValidationKind::PhaseMismatch);
}

#[test]
fn turn_commands_need_a_game() {
    for command in [Command::Meld, Command::Discard] {
        let err = apply_command(
            None,
            &roster(2),
            &request(command, "p0", &["S07"]),
            &mut rng(),
        )
        .unwrap_err();
        assert_eq!(kind(&err), &ValidationKind::PhaseMismatch);
    }
}

#[test]
fn command_names_parse() {
    assert_eq!("start-game".parse::<Command>().unwrap(), Command::StartGame);
    assert_eq!("new-game".parse::<Command>().unwrap(), Command::StartGame);
    assert_eq!("meld".parse::<Command>().unwrap(), Command::Meld);
    assert_eq!("discard".parse::<Command>().unwrap(), Command::Discard);
    let err = "shuffle".parse::<Command>().unwrap_err();
    assert_eq!(kind(&err), &ValidationKind::InvalidCommand);
}

#[test]
fn request_parses_transport_selection() {
    let req = CommandRequest::parse("meld", pid("p0"), Some("S06, S07,S08")).unwrap();
    assert_eq!(req.command, Command::Meld);
    assert_eq!(req.selection, CardFixtures::parse_hardcoded(&["S06", "S07", "S08"]));

    let err = CommandRequest::parse("meld", pid("p0"), Some("S6")).unwrap_err();
    assert_eq!(kind(&err), &ValidationKind::ParseCard);
}

#[test]
fn reserved_calls_are_rejected() {
    let session = session_with(&[("a", &["S07"]), ("b", &["H07"])], "C02", Location::Stock, 0);
    for command in [Command::Pong, Command::Chow] {
        let err = apply_command(
            Some(&session),
            session.players(),
            &request(command, "a", &[]),
            &mut rng(),
        )
        .unwrap_err();
        assert_eq!(kind(&err), &ValidationKind::InvalidCommand);
    }
}

#[test]
fn meld_creates_a_meld_and_keeps_the_turn() {
    let session = session_with(
        &[("a", &["S06", "S07", "S08", "C01"]), ("b", &["H02"])],
        "C02",
        Location::Stock,
        0,
    );
    let outcome = apply_command(
        Some(&session),
        session.players(),
        &request(Command::Meld, "a", &["S06", "S07", "S08"]),
        &mut rng(),
    )
    .unwrap();

    let melds = outcome.session.deck().melds_of(&pid("a"));
    assert_eq!(melds.len(), 1);
    assert_eq!(melds[0].cards.len(), 3);
    assert_eq!(outcome.session.current_player(), &pid("a"));
    assert!(matches!(
        outcome.transitions.as_slice(),
        [GameTransition::CardsMelded { action: MeldAction::Created, .. }]
    ));
}

#[test]
fn failed_meld_leaves_the_session_untouched() {
    let session = session_with(
        &[("a", &["S06", "H09"]), ("b", &["H02"])],
        "C02",
        Location::Stock,
        0,
    );
    let before = session.clone();
    let err = apply_command(
        Some(&session),
        session.players(),
        &request(Command::Meld, "a", &["S06", "H09"]),
        &mut rng(),
    )
    .unwrap_err();
    assert_eq!(kind(&err), &ValidationKind::InvalidMeld);
    assert_eq!(session, before);
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let session = session_with(&[("a", &["S07"]), ("b", &["H07"])], "C02", Location::Stock, 0);
    let err = apply_command(
        Some(&session),
        session.players(),
        &request(Command::Meld, "b", &["H07"]),
        &mut rng(),
    )
    .unwrap_err();
    assert_eq!(kind(&err), &ValidationKind::OutOfTurn);

    let err = apply_command(
        Some(&session),
        session.players(),
        &request(Command::Discard, "ghost", &["H07"]),
        &mut rng(),
    )
    .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
}

#[test]
fn discard_passes_turn_and_next_player_draws() {
    let session = session_with(
        &[("a", &["S02", "S09"]), ("b", &["H02"])],
        "C02",
        Location::Stock,
        0,
    );
    let stock_before = session.deck().count_at(&Location::Stock);

    let outcome = apply_command(
        Some(&session),
        session.players(),
        &request(Command::Discard, "a", &["S09"]),
        &mut rng(),
    )
    .unwrap();
    let next = &outcome.session;

    assert_eq!(next.deck().discard_top(), Some(CardFixtures::card("S09")));
    assert_eq!(next.deck().location_of(CardFixtures::card("S09")), &Location::DiscardTop);
    assert_eq!(next.current_player_index(), 1);
    assert_eq!(next.deck().hand_len(&pid("b")), 2);
    assert_eq!(next.deck().count_at(&Location::Stock), stock_before - 1);
    assert_eq!(
        outcome.transitions,
        vec![
            GameTransition::CardDiscarded {
                player_id: pid("a"),
                card: CardFixtures::card("S09")
            },
            GameTransition::TurnBecame { player_id: pid("b") },
        ]
    );
}

#[test]
fn discard_needs_exactly_one_owned_card() {
    let session = session_with(
        &[("a", &["S02", "S09"]), ("b", &["H02"])],
        "C02",
        Location::Stock,
        0,
    );

    let err = apply_command(
        Some(&session),
        session.players(),
        &request(Command::Discard, "a", &["S02", "S09"]),
        &mut rng(),
    )
    .unwrap_err();
    assert_eq!(kind(&err), &ValidationKind::InvalidSelection);

    let err = apply_command(
        Some(&session),
        session.players(),
        &request(Command::Discard, "a", &["H02"]),
        &mut rng(),
    )
    .unwrap_err();
    assert_eq!(kind(&err), &ValidationKind::CardNotInHand);
}

#[test]
fn going_out_wins_when_the_turn_comes_back() {
    let session = session_with(
        &[("a", &["S07", "C09"]), ("b", &["H02", "H03"])],
        "C02",
        Location::Stock,
        0,
    );
    let players = session.players().to_vec();
    let mut rng = rng();

    let s = apply_command(
        Some(&session),
        &players,
        &request(Command::Meld, "a", &["S07"]),
        &mut rng,
    )
    .unwrap()
    .session;
    let s = apply_command(Some(&s), &players, &request(Command::Discard, "a", &["C09"]), &mut rng)
        .unwrap()
        .session;
    assert_eq!(s.deck().hand_len(&pid("a")), 0);
    assert_eq!(s.phase(), Phase::InProgress);

    let outcome = apply_command(
        Some(&s),
        &players,
        &request(Command::Discard, "b", &["H02"]),
        &mut rng,
    )
    .unwrap();
    let s = outcome.session;
    assert_eq!(s.phase(), Phase::Finished { winner: pid("a") });
    assert_eq!(s.deck().hand_len(&pid("a")), 0, "winner must not draw");
    assert!(outcome
        .transitions
        .contains(&GameTransition::RoundEnded { winner: Some(pid("a")) }));

    let result = round_result(&s).unwrap();
    assert_eq!(result.winner, Some(pid("a")));
    assert_eq!(result.scores[0].score, 0);
    assert!(result.scores[1].score > 0);

    let err = apply_command(
        Some(&s),
        &players,
        &request(Command::Discard, "a", &["H03"]),
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(kind(&err), &ValidationKind::PhaseMismatch);

    let restarted = apply_command(
        Some(&s),
        &players,
        &request(Command::StartGame, "b", &[]),
        &mut rng,
    )
    .unwrap();
    assert_eq!(restarted.session.phase(), Phase::InProgress);
    assert!(restarted.transitions.contains(&GameTransition::GameStarted));
}

#[test]
fn drawing_the_last_stock_card_exhausts_the_round() {
    let mut session = session_with(
        &[("a", &["S02", "S03"]), ("b", &["H02"])],
        "C02",
        Location::Discard,
        0,
    );
    let mut placement = session.deck().clone();
    placement.set_location(CardFixtures::card("D13"), Location::Stock);
    session = GameSession::from_parts(placement, session.players().to_vec(), 0).unwrap();

    let outcome = apply_command(
        Some(&session),
        session.players(),
        &request(Command::Discard, "a", &["S02"]),
        &mut rng(),
    )
    .unwrap();
    let s = &outcome.session;
    assert_eq!(s.deck().count_at(&Location::Stock), 0);
    assert_eq!(s.deck().hand_len(&pid("b")), 2);
    assert_eq!(s.phase(), Phase::Exhausted);
    assert!(outcome
        .transitions
        .contains(&GameTransition::RoundEnded { winner: None }));
    assert_eq!(round_result(s).unwrap().winner, None);
}

#[test]
fn session_json_shape() {
    let session = session_with(&[("a", &["S07"]), ("b", &["H07"])], "JO1", Location::Stock, 1);
    let value = serde_json::to_value(&session).unwrap();

    assert_eq!(value["currentPlayerIndex"], 1);
    assert_eq!(value["players"], serde_json::json!(["a", "b"]));
    let deck = value["deck"].as_array().unwrap();
    assert_eq!(deck.len(), 54);
    assert_eq!(deck[0], serde_json::json!(["S01", "stock"]));
    assert_eq!(deck[6], serde_json::json!(["S07", "hand_a"]));
    assert_eq!(deck[52], serde_json::json!(["JO1", "dora"]));

    let back: GameSession = serde_json::from_value(value).unwrap();
    assert_eq!(back, session);
}

#[test]
fn corrupt_session_json_is_rejected() {
    let session = session_with(&[("a", &["S07"]), ("b", &["H07"])], "JO1", Location::Stock, 0);
    let mut value = serde_json::to_value(&session).unwrap();

    value["currentPlayerIndex"] = serde_json::json!(5);
    assert!(serde_json::from_value::<GameSession>(value.clone()).is_err());

    value["currentPlayerIndex"] = serde_json::json!(0);
    value["deck"][0] = serde_json::json!(["S01", "dora"]);
    assert!(serde_json::from_value::<GameSession>(value).is_err());
}
