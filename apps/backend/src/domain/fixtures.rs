use super::cards_types::Card;

/// Centralized helper for parsing hardcoded card tokens in fixtures and demo data.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens (e.g., ["S07", "H13", "JO1"]) into Card instances.
    ///
    /// Only for tokens known to be valid at compile time.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|s| Self::card(s)).collect()
    }

    pub fn card(token: &str) -> Card {
        #[allow(clippy::expect_used)]
        token.parse::<Card>().expect("hardcoded valid card token")
    }
}
