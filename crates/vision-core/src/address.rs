//! Tezos address parsing and display.
//!
//! Addresses are Base58Check strings of 36 characters. The decoded form is a
//! 3-byte type prefix, a 20-byte hash and a 4-byte checksum (the first four
//! bytes of double SHA-256 over prefix and hash):
//! - `tz1`, `tz2`, `tz3`: implicit accounts (Ed25519, secp256k1, P-256)
//! - `KT1`: originated contracts

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::constants::{ADDRESS_DISPLAY_END, ADDRESS_DISPLAY_START};
use crate::error::AddressError;

/// Length of an encoded address string.
pub const ADDRESS_LEN: usize = 36;

/// Length of the decoded address: prefix, hash and checksum.
const DECODED_LEN: usize = 27;

const CHECKSUM_LEN: usize = 4;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Binary prefixes for each textual prefix.
const PREFIXES: [(&str, [u8; 3]); 4] = [
    ("tz1", [6, 161, 159]),
    ("tz2", [6, 161, 161]),
    ("tz3", [6, 161, 164]),
    ("KT1", [2, 90, 121]),
];

/// Whether an address belongs to a key-controlled account or a contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    /// `tz1`/`tz2`/`tz3` accounts.
    Implicit,
    /// `KT1` contracts.
    Originated,
}

impl AddressKind {
    /// Suffix shown next to a shortened address.
    pub fn label(&self) -> &'static str {
        match self {
            AddressKind::Implicit => "User",
            AddressKind::Originated => "Contract",
        }
    }
}

/// A checksum-verified Tezos address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TezosAddress(String);

impl TezosAddress {
    /// Parse and verify an address string.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        if s.len() != ADDRESS_LEN {
            return Err(AddressError::InvalidLength(s.len()));
        }

        let text_prefix = s.get(..3).ok_or(AddressError::InvalidLength(s.len()))?;
        let expected = PREFIXES
            .iter()
            .find(|(p, _)| *p == text_prefix)
            .map(|(_, bytes)| *bytes)
            .ok_or_else(|| AddressError::UnknownPrefix(text_prefix.to_string()))?;

        if let Some(c) = s.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
            return Err(AddressError::InvalidCharacter(c));
        }

        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|_| AddressError::InvalidChecksum)?;
        if decoded.len() != DECODED_LEN {
            return Err(AddressError::InvalidPayloadLength(decoded.len()));
        }

        let (payload, checksum) = decoded.split_at(DECODED_LEN - CHECKSUM_LEN);
        if checksum != &double_sha256(payload)[..CHECKSUM_LEN] {
            return Err(AddressError::InvalidChecksum);
        }
        if payload[..3] != expected {
            return Err(AddressError::UnknownPrefix(text_prefix.to_string()));
        }

        Ok(Self(s.to_string()))
    }

    /// The address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> AddressKind {
        if self.0.starts_with("KT1") {
            AddressKind::Originated
        } else {
            AddressKind::Implicit
        }
    }

    /// Shortened form using the default display lengths, e.g. `tz1bur...YjjX`.
    pub fn short(&self) -> String {
        shorten_address(&self.0, ADDRESS_DISPLAY_START, ADDRESS_DISPLAY_END)
    }

    /// Shortened form followed by the kind label, e.g. `tz1bur...YjjX (User)`.
    pub fn display_with_kind(&self) -> String {
        format!("{} ({})", self.short(), self.kind().label())
    }
}

/// Keep the first `start` and last `end` characters of `address`, joined by
/// `...`. Strings no longer than `start + end` are returned unchanged.
pub fn shorten_address(address: &str, start: usize, end: usize) -> String {
    let len = address.chars().count();
    if len <= start + end {
        return address.to_string();
    }
    let head: String = address.chars().take(start).collect();
    let tail: String = address.chars().skip(len - end).collect();
    format!("{head}...{tail}")
}

/// Whether `s` is a valid Tezos address.
pub fn is_valid_address(s: &str) -> bool {
    TezosAddress::parse(s).is_ok()
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

impl fmt::Display for TezosAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TezosAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TezosAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TezosAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
