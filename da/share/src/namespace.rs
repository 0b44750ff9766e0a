use serde::{Deserialize, Serialize};

use crate::consts::{NAMESPACE_ID_SIZE, NAMESPACE_SIZE};
use crate::error::ShareError;

/// Ownership/category tag for the data carried by a share.
///
/// Namespaces order by their raw byte representation: the version byte
/// first, then the id bytes. The derived `Ord` matches that because the
/// fields are declared in raw order.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct Namespace {
    version: u8,
    id: [u8; NAMESPACE_ID_SIZE],
}

impl Namespace {
    /// Transaction data.
    pub const TX: Self = Self::primary_reserved(0x01);
    /// Pay-for-blob metadata.
    pub const PAY_FOR_BLOB: Self = Self::primary_reserved(0x04);
    /// Padding after the primary reserved area of the square.
    pub const PRIMARY_RESERVED_PADDING: Self = Self::primary_reserved(0xff);
    /// Padding filling the square up to its full size.
    pub const TAIL_PADDING: Self = {
        let mut id = [0xff; NAMESPACE_ID_SIZE];
        id[NAMESPACE_ID_SIZE - 1] = 0xfe;
        Self {
            version: u8::MAX,
            id,
        }
    };
    /// Erasure-coded half of the extended square.
    pub const PARITY: Self = Self {
        version: u8::MAX,
        id: [0xff; NAMESPACE_ID_SIZE],
    };

    const fn primary_reserved(last: u8) -> Self {
        let mut id = [0u8; NAMESPACE_ID_SIZE];
        id[NAMESPACE_ID_SIZE - 1] = last;
        Self { version: 0, id }
    }

    pub fn new(version: u8, id: &[u8]) -> Result<Self, ShareError> {
        if id.len() != NAMESPACE_ID_SIZE {
            return Err(ShareError::InvalidNamespaceId {
                expected: NAMESPACE_ID_SIZE,
                got: id.len(),
            });
        }
        let mut buff = [0u8; NAMESPACE_ID_SIZE];
        buff.copy_from_slice(id);
        Ok(Self { version, id: buff })
    }

    /// Parses the raw `NAMESPACE_SIZE`-byte wire form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ShareError> {
        if bytes.len() != NAMESPACE_SIZE {
            return Err(ShareError::MalformedShare {
                context: "a namespace",
                expected: NAMESPACE_SIZE,
                got: bytes.len(),
            });
        }
        Self::new(bytes[0], &bytes[1..])
    }

    pub const fn version(&self) -> u8 {
        self.version
    }

    pub const fn id(&self) -> &[u8; NAMESPACE_ID_SIZE] {
        &self.id
    }

    /// Raw wire form: version byte followed by the id bytes.
    pub fn to_bytes(&self) -> [u8; NAMESPACE_SIZE] {
        let mut buff = [0u8; NAMESPACE_SIZE];
        buff[0] = self.version;
        buff[1..].copy_from_slice(&self.id);
        buff
    }

    pub fn is_tx(&self) -> bool {
        *self == Self::TX
    }

    pub fn is_pay_for_blob(&self) -> bool {
        *self == Self::PAY_FOR_BLOB
    }

    pub fn is_reserved_padding(&self) -> bool {
        *self == Self::PRIMARY_RESERVED_PADDING
    }

    pub fn is_tail_padding(&self) -> bool {
        *self == Self::TAIL_PADDING
    }

    pub fn is_parity(&self) -> bool {
        *self == Self::PARITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace_with_last_byte(last: u8) -> Namespace {
        let mut id = [0u8; NAMESPACE_ID_SIZE];
        id[NAMESPACE_ID_SIZE - 1] = last;
        Namespace::new(0, &id).unwrap()
    }

    #[test]
    fn raw_byte_ordering() {
        let a = namespace_with_last_byte(0x01);
        let b = namespace_with_last_byte(0x02);
        assert!(a < b);
        // Version dominates the id.
        let c = Namespace::new(1, &[0u8; NAMESPACE_ID_SIZE]).unwrap();
        assert!(b < c);
        assert!(c < Namespace::TAIL_PADDING);
        assert!(Namespace::TAIL_PADDING < Namespace::PARITY);
    }

    #[test]
    fn classification() {
        assert!(Namespace::TX.is_tx());
        assert!(Namespace::PAY_FOR_BLOB.is_pay_for_blob());
        assert!(Namespace::PRIMARY_RESERVED_PADDING.is_reserved_padding());
        assert!(Namespace::TAIL_PADDING.is_tail_padding());
        assert!(Namespace::PARITY.is_parity());
        let user = namespace_with_last_byte(0xab);
        assert!(!user.is_tx() && !user.is_pay_for_blob() && !user.is_tail_padding());
    }

    #[test]
    fn wire_round_trip() {
        let ns = namespace_with_last_byte(0x2a);
        let bytes = ns.to_bytes();
        assert_eq!(bytes.len(), NAMESPACE_SIZE);
        assert_eq!(Namespace::from_bytes(&bytes).unwrap(), ns);
    }

    #[test]
    fn rejects_wrong_id_length() {
        assert!(matches!(
            Namespace::new(0, &[0u8; 4]),
            Err(ShareError::InvalidNamespaceId { expected: NAMESPACE_ID_SIZE, got: 4 })
        ));
        assert!(matches!(
            Namespace::from_bytes(&[0u8; 3]),
            Err(ShareError::MalformedShare { .. })
        ));
    }
}
