use serde::{Deserialize, Serialize};

use crate::consts::{
    COMPACT_SHARE_RESERVED_BYTES, CONTINUATION_SPARSE_SHARE_CONTENT_SIZE,
    FIRST_SPARSE_SHARE_CONTENT_SIZE, NAMESPACE_SIZE, SEQUENCE_LEN_BYTES, SHARE_INFO_BYTES,
    SHARE_SIZE,
};
use crate::error::ShareError;
use crate::info_byte::InfoByte;
use crate::namespace::Namespace;

/// Fixed-size leaf unit of the data square.
///
/// A share is immutable once constructed and always exactly `SHARE_SIZE`
/// bytes. Layout, left to right: namespace, info byte, sequence length
/// (sequence-start shares only), reserved offset (compact shares only),
/// zero-padded payload.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Share(Vec<u8>);

impl Share {
    pub fn new(data: Vec<u8>) -> Result<Self, ShareError> {
        if data.len() != SHARE_SIZE {
            return Err(ShareError::MalformedShare {
                context: "share data",
                expected: SHARE_SIZE,
                got: data.len(),
            });
        }
        Ok(Self(data))
    }

    pub fn namespace(&self) -> Result<Namespace, ShareError> {
        if self.0.len() < NAMESPACE_SIZE {
            return Err(ShareError::MalformedShare {
                context: "a namespace",
                expected: NAMESPACE_SIZE,
                got: self.0.len(),
            });
        }
        Namespace::from_bytes(&self.0[..NAMESPACE_SIZE])
    }

    pub fn info_byte(&self) -> Result<InfoByte, ShareError> {
        if self.0.len() < NAMESPACE_SIZE + SHARE_INFO_BYTES {
            return Err(ShareError::MalformedShare {
                context: "an info byte",
                expected: NAMESPACE_SIZE + SHARE_INFO_BYTES,
                got: self.0.len(),
            });
        }
        Ok(InfoByte::from_u8(self.0[NAMESPACE_SIZE]))
    }

    pub fn version(&self) -> Result<u8, ShareError> {
        Ok(self.info_byte()?.version())
    }

    /// Fails with `UnsupportedShareVersion` when the share's version is not
    /// in `supported`.
    pub fn supports_versions(&self, supported: &[u8]) -> Result<(), ShareError> {
        let version = self.version()?;
        if !supported.contains(&version) {
            return Err(ShareError::UnsupportedShareVersion(version));
        }
        Ok(())
    }

    /// True for the first share of a sequence.
    pub fn is_sequence_start(&self) -> Result<bool, ShareError> {
        Ok(self.info_byte()?.is_sequence_start())
    }

    /// True for shares in the transaction or pay-for-blob namespace, which
    /// additionally carry a reserved offset field.
    pub fn is_compact_share(&self) -> Result<bool, ShareError> {
        let ns = self.namespace()?;
        Ok(ns.is_tx() || ns.is_pay_for_blob())
    }

    /// Total byte length of the sequence this share begins. Continuation
    /// shares carry no length and yield 0.
    pub fn sequence_len(&self) -> Result<u32, ShareError> {
        if !self.is_sequence_start()? {
            return Ok(0);
        }
        let start = NAMESPACE_SIZE + SHARE_INFO_BYTES;
        let end = start + SEQUENCE_LEN_BYTES;
        if self.0.len() < end {
            return Err(ShareError::MalformedShare {
                context: "a sequence length",
                expected: end,
                got: self.0.len(),
            });
        }
        let buff: [u8; SEQUENCE_LEN_BYTES] = self.0[start..end]
            .try_into()
            .expect("Slice length matches the field width");
        Ok(u32::from_be_bytes(buff))
    }

    /// True for namespace padding (sequence start with a zero sequence
    /// length), tail padding and reserved padding shares.
    pub fn is_padding(&self) -> Result<bool, ShareError> {
        Ok(self.is_namespace_padding()?
            || self.is_tail_padding()?
            || self.is_reserved_padding()?)
    }

    fn is_namespace_padding(&self) -> Result<bool, ShareError> {
        Ok(self.is_sequence_start()? && self.sequence_len()? == 0)
    }

    fn is_tail_padding(&self) -> Result<bool, ShareError> {
        Ok(self.namespace()?.is_tail_padding())
    }

    fn is_reserved_padding(&self) -> Result<bool, ShareError> {
        Ok(self.namespace()?.is_reserved_padding())
    }

    /// Payload region after the header. Does not contain the namespace,
    /// info byte, sequence length or reserved bytes.
    pub fn raw_data(&self) -> Result<&[u8], ShareError> {
        let start = self.raw_data_start_index()?;
        if self.0.len() < start {
            return Err(ShareError::MalformedShare {
                context: "raw data",
                expected: start,
                got: self.0.len(),
            });
        }
        Ok(&self.0[start..])
    }

    fn raw_data_start_index(&self) -> Result<usize, ShareError> {
        let mut index = NAMESPACE_SIZE + SHARE_INFO_BYTES;
        if self.is_sequence_start()? {
            index += SEQUENCE_LEN_BYTES;
        }
        if self.is_compact_share()? {
            index += COMPACT_SHARE_RESERVED_BYTES;
        }
        Ok(index)
    }

    /// Payload region starting at the reserved-offset boundary of a compact
    /// share. Empty when the offset is 0, i.e. no logical unit begins in
    /// this share. Equal to [`Self::raw_data`] for sparse shares.
    pub fn raw_data_using_reserved(&self) -> Result<&[u8], ShareError> {
        let start = self.raw_data_start_index_using_reserved()?;
        if start == 0 {
            return Ok(&[]);
        }
        if self.0.len() < start {
            return Err(ShareError::MalformedShare {
                context: "raw data",
                expected: start,
                got: self.0.len(),
            });
        }
        Ok(&self.0[start..])
    }

    /// Start index of raw data accounting for the reserved offset. For
    /// compact shares this is the offset the reserved bytes encode,
    /// measured from the beginning of the share.
    fn raw_data_start_index_using_reserved(&self) -> Result<usize, ShareError> {
        let mut index = NAMESPACE_SIZE + SHARE_INFO_BYTES;
        if self.is_sequence_start()? {
            index += SEQUENCE_LEN_BYTES;
        }
        if self.is_compact_share()? {
            let end = index + COMPACT_SHARE_RESERVED_BYTES;
            if self.0.len() < end {
                return Err(ShareError::MalformedShare {
                    context: "reserved bytes",
                    expected: end,
                    got: self.0.len(),
                });
            }
            let reserved = parse_reserved_bytes(&self.0[index..end])?;
            return Ok(reserved as usize);
        }
        Ok(index)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

/// Parses the big-endian reserved offset field of a compact share.
pub fn parse_reserved_bytes(bytes: &[u8]) -> Result<u32, ShareError> {
    if bytes.len() != COMPACT_SHARE_RESERVED_BYTES {
        return Err(ShareError::MalformedShare {
            context: "reserved bytes",
            expected: COMPACT_SHARE_RESERVED_BYTES,
            got: bytes.len(),
        });
    }
    let buff: [u8; COMPACT_SHARE_RESERVED_BYTES] = bytes
        .try_into()
        .expect("Slice length matches the field width");
    Ok(u32::from_be_bytes(buff))
}

/// Strips shares down to their raw buffers for the square layout engine.
pub fn shares_to_bytes(shares: &[Share]) -> Vec<Vec<u8>> {
    shares.iter().map(Share::to_vec).collect()
}

/// Rebuilds shares from raw buffers, validating each length.
pub fn shares_from_bytes(bytes: &[Vec<u8>]) -> Result<Vec<Share>, ShareError> {
    bytes.iter().cloned().map(Share::new).collect()
}

/// Number of shares a sparse sequence of `sequence_len` bytes occupies.
///
/// Capacity-planning dual of the splitter's write loop: the result always
/// matches the share count the splitter produces for the same length.
pub fn sparse_shares_needed(sequence_len: u32) -> usize {
    if sequence_len == 0 {
        return 0;
    }
    if (sequence_len as usize) < FIRST_SPARSE_SHARE_CONTENT_SIZE {
        return 1;
    }
    let mut bytes_available = FIRST_SPARSE_SHARE_CONTENT_SIZE;
    let mut shares_needed = 1;
    while bytes_available < sequence_len as usize {
        bytes_available += CONTINUATION_SPARSE_SHARE_CONTENT_SIZE;
        shares_needed += 1;
    }
    shares_needed
}
