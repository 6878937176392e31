//! Core card-related types: Card, Rank, Suit, JokerId and the 54-card catalog.

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

/// Card rank; the numeric value runs Ace = 1 through King = 13.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum JokerId {
    One,
    Two,
}

/// One of the 54 distinct cards. Cards are only ever relocated, never created.
///
/// Ord follows catalog order (S, H, D, C by rank, then the jokers).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Card {
    Suited { suit: Suit, rank: Rank },
    Joker(JokerId),
}

pub const CARD_COUNT: usize = 54;

/// Every card in catalog order: S01..S13, H01..H13, D01..D13, C01..C13, JO1, JO2.
pub const ALL_CARDS: [Card; CARD_COUNT] = build_catalog();

const fn build_catalog() -> [Card; CARD_COUNT] {
    let mut cards = [Card::Joker(JokerId::One); CARD_COUNT];
    let mut s = 0;
    while s < 4 {
        let mut r = 0;
        while r < 13 {
            cards[s * 13 + r] = Card::Suited {
                suit: Suit::ALL[s],
                rank: Rank::ALL[r],
            };
            r += 1;
        }
        s += 1;
    }
    cards[52] = Card::Joker(JokerId::One);
    cards[53] = Card::Joker(JokerId::Two);
    cards
}

impl Card {
    pub const fn suited(suit: Suit, rank: Rank) -> Self {
        Card::Suited { suit, rank }
    }

    pub fn all() -> impl Iterator<Item = Card> {
        ALL_CARDS.into_iter()
    }

    /// Position in [`ALL_CARDS`].
    pub const fn index(self) -> usize {
        match self {
            Card::Suited { suit, rank } => suit as usize * 13 + rank as usize,
            Card::Joker(JokerId::One) => 52,
            Card::Joker(JokerId::Two) => 53,
        }
    }

    pub const fn rank(self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(rank),
            Card::Joker(_) => None,
        }
    }

    pub const fn suit(self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(suit),
            Card::Joker(_) => None,
        }
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Card::Joker(_))
    }

    pub fn is_rank(self, rank: Rank) -> bool {
        self.rank() == Some(rank)
    }
}
