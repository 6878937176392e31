//! Meld identifier generation.
//!
//! Meld ids are 6-character strings of lowercase ASCII letters, drawn from the
//! caller's RNG so that tests can pin them down.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const MELD_ID_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeldId(String);

impl MeldId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MeldId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != MELD_ID_LEN || !s.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(DomainError::validation(
                ValidationKind::ParseMeldId,
                format!("Invalid meld id: {s}"),
            ));
        }
        Ok(MeldId(s.to_string()))
    }
}

impl Display for MeldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl Serialize for MeldId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MeldId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<MeldId>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

/// Draw a meld id, re-drawing while `taken` reports a collision.
pub fn generate_meld_id<R, F>(rng: &mut R, taken: F) -> MeldId
where
    R: Rng + ?Sized,
    F: Fn(&MeldId) -> bool,
{
    loop {
        let mut s = String::with_capacity(MELD_ID_LEN);
        for _ in 0..MELD_ID_LEN {
            s.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
        }
        let id = MeldId(s);
        if !taken(&id) {
            return id;
        }
    }
}
