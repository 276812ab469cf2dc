use crate::{
    constants::{HASH_HEX_LEN, HASH_LEN},
    Error, Result,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use super::TreeHash;

/// Leaf or node hash with a lowercase hexadecimal display.
///
/// Ordering is by byte value which for lowercase hex is the
/// same as ordering the hexadecimal strings.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LeafHash(pub TreeHash);

impl LeafHash {
    /// Parse a hash from hexadecimal.
    ///
    /// Only the lowercase form is accepted so that hashes have
    /// exactly one textual representation at every boundary.
    pub fn from_hex(value: &str) -> Result<Self> {
        let is_lower_hex = value
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if value.len() != HASH_HEX_LEN || !is_lower_hex {
            return Err(Error::MalformedHash(value.to_owned()));
        }
        let mut bytes = [0u8; HASH_LEN];
        hex::decode_to_slice(value, &mut bytes)
            .map_err(|_| Error::MalformedHash(value.to_owned()))?;
        Ok(Self(bytes))
    }

    /// Hexadecimal representation of this hash.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8; 32]> for LeafHash {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<TreeHash> for LeafHash {
    fn from(value: TreeHash) -> Self {
        Self(value)
    }
}

impl From<LeafHash> for TreeHash {
    fn from(value: LeafHash) -> Self {
        value.0
    }
}

impl FromStr for LeafHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LeafHash::from_hex(s)
    }
}

impl Serialize for LeafHash {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for LeafHash {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        LeafHash::from_hex(&value).map_err(de::Error::custom)
    }
}

impl fmt::Display for LeafHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
