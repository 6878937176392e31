//! The placement map: the single source of truth for where every card is.
//!
//! A `Placement` holds exactly one [`Location`] per catalog card, so the
//! "every card has exactly one location" invariant holds by construction.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::meld_id::MeldId;
use crate::domain::state::PlayerId;
use crate::domain::{Card, ALL_CARDS, CARD_COUNT};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// Where a card currently lies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// Face-down undrawn pile.
    Stock,
    /// The bonus card revealed at game start; never moves again.
    Dora,
    Hand(PlayerId),
    Meld { owner: PlayerId, meld_id: MeldId },
    /// Just discarded, not yet the visible discard top.
    WaitingCalled,
    /// Topmost, callable discard.
    DiscardTop,
    /// Buried discard.
    Discard,
}

impl Location {
    pub fn hand(player: &PlayerId) -> Self {
        Location::Hand(player.clone())
    }

    pub fn is_hand_of(&self, player: &PlayerId) -> bool {
        matches!(self, Location::Hand(p) if p == player)
    }

    pub fn meld_id(&self) -> Option<&MeldId> {
        match self {
            Location::Meld { meld_id, .. } => Some(meld_id),
            _ => None,
        }
    }
}

// Wire tags match the persisted blob: "hand_<player>", "meld_<player>_<meldId>".
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Location::Stock => f.write_str("stock"),
            Location::Dora => f.write_str("dora"),
            Location::Hand(player) => write!(f, "hand_{player}"),
            Location::Meld { owner, meld_id } => write!(f, "meld_{owner}_{meld_id}"),
            Location::WaitingCalled => f.write_str("waiting-called"),
            Location::DiscardTop => f.write_str("discard-top"),
            Location::Discard => f.write_str("discard"),
        }
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || {
            DomainError::validation(ValidationKind::ParseLocation, format!("Parse location: {s}"))
        };
        match s {
            "stock" => return Ok(Location::Stock),
            "dora" => return Ok(Location::Dora),
            "waiting-called" => return Ok(Location::WaitingCalled),
            "discard-top" => return Ok(Location::DiscardTop),
            "discard" => return Ok(Location::Discard),
            _ => {}
        }
        if let Some(player) = s.strip_prefix("hand_") {
            if player.is_empty() {
                return Err(parse_err());
            }
            return Ok(Location::Hand(PlayerId::new(player)));
        }
        if let Some(rest) = s.strip_prefix("meld_") {
            // Meld ids never contain '_', so split from the right.
            let (owner, meld_id) = rest.rsplit_once('_').ok_or_else(parse_err)?;
            if owner.is_empty() {
                return Err(parse_err());
            }
            let meld_id = meld_id.parse::<MeldId>().map_err(|_| parse_err())?;
            return Ok(Location::Meld {
                owner: PlayerId::new(owner),
                meld_id,
            });
        }
        Err(parse_err())
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Location>().map_err(|e| D::Error::custom(e.to_string()))
    }
}

/// A meld as seen on the table: the cards sharing one meld location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meld {
    pub owner: PlayerId,
    pub meld_id: MeldId,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    // Indexed by `Card::index()`.
    locations: Vec<Location>,
}

impl Default for Placement {
    fn default() -> Self {
        Self::new()
    }
}

impl Placement {
    /// Every card in the stock.
    pub fn new() -> Self {
        Self {
            locations: vec![Location::Stock; CARD_COUNT],
        }
    }

    /// Rebuild from `[card, location]` pairs; the pairs must cover the full
    /// catalog exactly once.
    pub fn try_from_entries<I>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (Card, Location)>,
    {
        let mut slots: Vec<Option<Location>> = vec![None; CARD_COUNT];
        for (card, location) in entries {
            let slot = &mut slots[card.index()];
            if slot.is_some() {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Card {card} placed twice"),
                ));
            }
            *slot = Some(location);
        }
        let mut locations = Vec::with_capacity(CARD_COUNT);
        for (card, slot) in ALL_CARDS.iter().zip(slots) {
            let location = slot.ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Card {card} has no location"),
                )
            })?;
            locations.push(location);
        }
        Ok(Self { locations })
    }

    pub fn location_of(&self, card: Card) -> &Location {
        &self.locations[card.index()]
    }

    pub fn set_location(&mut self, card: Card, location: Location) {
        self.locations[card.index()] = location;
    }

    /// All `(card, location)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (Card, &Location)> + '_ {
        ALL_CARDS.iter().copied().zip(self.locations.iter())
    }

    pub fn cards_where<F>(&self, mut pred: F) -> Vec<Card>
    where
        F: FnMut(&Location) -> bool,
    {
        self.entries()
            .filter(|(_, loc)| pred(loc))
            .map(|(card, _)| card)
            .collect()
    }

    pub fn cards_at(&self, location: &Location) -> Vec<Card> {
        self.cards_where(|loc| loc == location)
    }

    /// First card (in catalog order) at `location`.
    pub fn first_card_at(&self, location: &Location) -> Option<Card> {
        self.entries()
            .find(|(_, loc)| *loc == location)
            .map(|(card, _)| card)
    }

    pub fn count_at(&self, location: &Location) -> usize {
        self.locations.iter().filter(|loc| *loc == location).count()
    }

    pub fn stock(&self) -> Vec<Card> {
        self.cards_at(&Location::Stock)
    }

    pub fn hand_of(&self, player: &PlayerId) -> Vec<Card> {
        self.cards_where(|loc| loc.is_hand_of(player))
    }

    pub fn hand_len(&self, player: &PlayerId) -> usize {
        self.locations.iter().filter(|loc| loc.is_hand_of(player)).count()
    }

    pub fn holds(&self, player: &PlayerId, card: Card) -> bool {
        self.location_of(card).is_hand_of(player)
    }

    pub fn dora(&self) -> Option<Card> {
        self.first_card_at(&Location::Dora)
    }

    /// The discard a player sees: a card still waiting to be called, else the top.
    pub fn discard_top(&self) -> Option<Card> {
        self.first_card_at(&Location::WaitingCalled)
            .or_else(|| self.first_card_at(&Location::DiscardTop))
    }

    /// Every meld on the table, ordered by the catalog position of its first card.
    pub fn melds(&self) -> Vec<Meld> {
        let mut melds: Vec<Meld> = Vec::new();
        for (card, location) in self.entries() {
            let Location::Meld { owner, meld_id } = location else {
                continue;
            };
            match melds.iter_mut().find(|m| &m.meld_id == meld_id) {
                Some(meld) => meld.cards.push(card),
                None => melds.push(Meld {
                    owner: owner.clone(),
                    meld_id: meld_id.clone(),
                    cards: vec![card],
                }),
            }
        }
        melds
    }

    pub fn melds_of(&self, player: &PlayerId) -> Vec<Meld> {
        self.melds()
            .into_iter()
            .filter(|m| &m.owner == player)
            .collect()
    }

    /// Look a meld up by id across every player's melds.
    pub fn find_meld(&self, meld_id: &MeldId) -> Option<Meld> {
        self.melds().into_iter().find(|m| &m.meld_id == meld_id)
    }

    pub fn has_meld_id(&self, meld_id: &MeldId) -> bool {
        self.locations.iter().any(|loc| loc.meld_id() == Some(meld_id))
    }

    /// Structural table invariants that hold between commands of a started game.
    pub fn check_table_invariants(&self, players: &[PlayerId]) -> Result<(), DomainError> {
        let corrupt = |detail: String| DomainError::infra(InfraErrorKind::DataCorruption, detail);

        let doras = self.count_at(&Location::Dora);
        if doras != 1 {
            return Err(corrupt(format!("Expected exactly one dora, found {doras}")));
        }
        let waiting = self.count_at(&Location::WaitingCalled);
        if waiting != 0 {
            return Err(corrupt(format!("{waiting} card(s) left waiting to be called")));
        }
        let tops = self.count_at(&Location::DiscardTop);
        if tops > 1 {
            return Err(corrupt(format!("{tops} cards on the discard top")));
        }
        for (card, location) in self.entries() {
            let owner = match location {
                Location::Hand(p) => p,
                Location::Meld { owner, .. } => owner,
                _ => continue,
            };
            if !players.contains(owner) {
                return Err(corrupt(format!("Card {card} held by unseated player {owner}")));
            }
        }
        Ok(())
    }
}

// Serialized as an ordered list of [card, location] pairs.
impl Serialize for Placement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.entries())
    }
}

impl<'de> Deserialize<'de> for Placement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<(Card, Location)>::deserialize(deserializer)?;
        Placement::try_from_entries(entries).map_err(|e| D::Error::custom(e.to_string()))
    }
}
