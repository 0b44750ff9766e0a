use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::ProofError;

pub const DATA_HASH_SIZE: usize = 32;

/// Committed root of the data square, the hash every row proof anchors to.
///
/// Displays as uppercase hex; serializes as a hex string in
/// human-readable formats and as raw bytes otherwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DataHash([u8; DATA_HASH_SIZE]);

impl DataHash {
    pub const fn new(bytes: [u8; DATA_HASH_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ProofError> {
        if bytes.len() != DATA_HASH_SIZE {
            return Err(ProofError::InvalidHashLength { got: bytes.len() });
        }
        let mut buff = [0u8; DATA_HASH_SIZE];
        buff.copy_from_slice(bytes);
        Ok(Self(buff))
    }

    pub fn from_hex(hex: &str) -> Result<Self, ProofError> {
        let bytes = const_hex::decode(hex)?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// SHA-256 of `data`, for fixtures and sanity checks.
    pub fn hash_of(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }
}

impl fmt::Display for DataHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", const_hex::encode_upper(self.0))
    }
}

impl FromStr for DataHash {
    type Err = ProofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for DataHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for DataHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            const_hex::const_encode::<DATA_HASH_SIZE, false>(&self.0)
                .as_str()
                .serialize(serializer)
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for DataHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s: Cow<str> = Cow::deserialize(deserializer)?;
            let mut buff = [0u8; DATA_HASH_SIZE];
            const_hex::decode_to_slice(s.as_ref(), &mut buff)
                .map(|()| Self(buff))
                .map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            Self::from_slice(&bytes).map_err(serde::de::Error::custom)
        }
    }
}
