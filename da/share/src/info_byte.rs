use serde::{Deserialize, Serialize};

use crate::consts::MAX_SHARE_VERSION;
use crate::error::ShareError;

/// Header byte following the namespace: the top 7 bits carry the share
/// version, the lowest bit flags the first share of a sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct InfoByte(u8);

impl InfoByte {
    pub fn new(version: u8, is_sequence_start: bool) -> Result<Self, ShareError> {
        if version > MAX_SHARE_VERSION {
            return Err(ShareError::ShareVersionTooLarge {
                got: version,
                max: MAX_SHARE_VERSION,
            });
        }
        Ok(Self(version << 1 | u8::from(is_sequence_start)))
    }

    pub const fn from_u8(byte: u8) -> Self {
        Self(byte)
    }

    pub const fn version(self) -> u8 {
        self.0 >> 1
    }

    pub const fn is_sequence_start(self) -> bool {
        self.0 & 1 == 1
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}
