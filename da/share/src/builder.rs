use crate::consts::{NAMESPACE_SIZE, SHARE_INFO_BYTES, SHARE_SIZE};
use crate::error::ShareError;
use crate::info_byte::InfoByte;
use crate::namespace::Namespace;
use crate::share::Share;

/// Incrementally assembles a single share.
///
/// The header is written on construction; the sequence length may be
/// written exactly once and only on the first share of a sequence, before
/// any payload. Payload is appended with [`Self::add_data`], which hands
/// back whatever did not fit, and the unfilled suffix is zeroed on
/// [`Self::zero_pad_if_necessary`] before [`Self::build`].
#[derive(Debug)]
pub struct ShareBuilder {
    is_first_share: bool,
    sequence_len_written: bool,
    data: Vec<u8>,
}

impl ShareBuilder {
    pub fn new(
        namespace: Namespace,
        share_version: u8,
        is_first_share: bool,
    ) -> Result<Self, ShareError> {
        let info = InfoByte::new(share_version, is_first_share)?;
        let mut data = Vec::with_capacity(SHARE_SIZE);
        data.extend_from_slice(&namespace.to_bytes());
        data.push(info.as_u8());
        Ok(Self {
            is_first_share,
            sequence_len_written: false,
            data,
        })
    }

    /// Writes the total byte length of the sequence this share begins.
    pub fn write_sequence_len(&mut self, sequence_len: u32) -> Result<(), ShareError> {
        if !self.is_first_share {
            return Err(ShareError::SequenceLenOnContinuationShare);
        }
        if self.sequence_len_written {
            return Err(ShareError::SequenceLenAlreadyWritten);
        }
        if self.data.len() != NAMESPACE_SIZE + SHARE_INFO_BYTES {
            return Err(ShareError::SequenceLenAfterData);
        }
        self.data.extend_from_slice(&sequence_len.to_be_bytes());
        self.sequence_len_written = true;
        Ok(())
    }

    /// Appends as much of `raw` as the share has room for, returning the
    /// leftover bytes that did not fit.
    pub fn add_data<'a>(&mut self, raw: &'a [u8]) -> Option<&'a [u8]> {
        let capacity = SHARE_SIZE - self.data.len();
        if raw.len() <= capacity {
            self.data.extend_from_slice(raw);
            return None;
        }
        self.data.extend_from_slice(&raw[..capacity]);
        Some(&raw[capacity..])
    }

    /// Fills the remaining suffix of the share with zeros.
    pub fn zero_pad_if_necessary(&mut self) {
        self.data.resize(SHARE_SIZE, 0);
    }

    pub fn build(self) -> Result<Share, ShareError> {
        if self.is_first_share && !self.sequence_len_written {
            return Err(ShareError::MissingSequenceLen);
        }
        Share::new(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{
        FIRST_SPARSE_SHARE_CONTENT_SIZE, NAMESPACE_ID_SIZE, SHARE_VERSION_ZERO,
    };

    fn namespace() -> Namespace {
        let mut id = [0u8; NAMESPACE_ID_SIZE];
        id[0] = 1;
        Namespace::new(0, &id).unwrap()
    }

    #[test]
    fn first_share_takes_header_then_payload() {
        let mut builder = ShareBuilder::new(namespace(), SHARE_VERSION_ZERO, true).unwrap();
        builder.write_sequence_len(3).unwrap();
        assert!(builder.add_data(b"abc").is_none());
        builder.zero_pad_if_necessary();
        let share = builder.build().unwrap();
        assert_eq!(share.sequence_len().unwrap(), 3);
        assert_eq!(&share.raw_data().unwrap()[..3], b"abc");
    }

    #[test]
    fn leftover_is_returned_when_payload_overflows() {
        let payload = vec![0xabu8; FIRST_SPARSE_SHARE_CONTENT_SIZE + 10];
        let mut builder = ShareBuilder::new(namespace(), SHARE_VERSION_ZERO, true).unwrap();
        builder
            .write_sequence_len(payload.len() as u32)
            .unwrap();
        let leftover = builder.add_data(&payload).unwrap();
        assert_eq!(leftover.len(), 10);
        // The share is already full, padding is a no-op.
        let share = builder.build().unwrap();
        assert_eq!(share.raw_data().unwrap(), &payload[..FIRST_SPARSE_SHARE_CONTENT_SIZE]);
    }

    #[test]
    fn sequence_len_misuse_is_rejected() {
        let mut continuation = ShareBuilder::new(namespace(), SHARE_VERSION_ZERO, false).unwrap();
        assert!(matches!(
            continuation.write_sequence_len(1),
            Err(ShareError::SequenceLenOnContinuationShare)
        ));

        let mut first = ShareBuilder::new(namespace(), SHARE_VERSION_ZERO, true).unwrap();
        first.write_sequence_len(1).unwrap();
        assert!(matches!(
            first.write_sequence_len(1),
            Err(ShareError::SequenceLenAlreadyWritten)
        ));

        let mut late = ShareBuilder::new(namespace(), SHARE_VERSION_ZERO, true).unwrap();
        late.add_data(b"abc");
        assert!(matches!(
            late.write_sequence_len(1),
            Err(ShareError::SequenceLenAfterData)
        ));
    }

    #[test]
    fn first_share_without_sequence_len_does_not_build() {
        let mut builder = ShareBuilder::new(namespace(), SHARE_VERSION_ZERO, true).unwrap();
        builder.zero_pad_if_necessary();
        assert!(matches!(builder.build(), Err(ShareError::MissingSequenceLen)));
    }

    #[test]
    fn invalid_share_version_fails_construction() {
        assert!(ShareBuilder::new(namespace(), 128, true).is_err());
    }
}
