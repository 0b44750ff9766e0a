// std
// crates
use tracing::debug;
// internal
use crate::blob::Blob;
use crate::builder::ShareBuilder;
use crate::consts::SUPPORTED_SHARE_VERSIONS;
use crate::error::ShareError;
use crate::padding::namespace_padding_shares;
use crate::share::Share;

/// Lazily splits blobs into the shares that will eventually be included in
/// a data square, applying the non-interactive default rules: every blob
/// starts on a fresh share and inter-blob padding carries the previous
/// blob's namespace.
///
/// A splitter owns its state exclusively and is not safe for concurrent
/// writes; confine one instance to one blob batch.
#[derive(Debug, Default)]
pub struct SparseShareSplitter {
    shares: Vec<Share>,
}

impl SparseShareSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `blob` as a fresh sequence of shares: a sequence-start share
    /// carrying the blob's total length, then continuation shares until
    /// the payload is consumed. The final share is zero-padded.
    pub fn write(&mut self, blob: &Blob) -> Result<(), ShareError> {
        if !SUPPORTED_SHARE_VERSIONS.contains(&blob.share_version) {
            return Err(ShareError::UnsupportedShareVersion(blob.share_version));
        }
        let sequence_len = u32::try_from(blob.data.len()).map_err(|_| {
            ShareError::InvalidArgument(
                "blob length does not fit the sequence length field".into(),
            )
        })?;

        let mut builder = ShareBuilder::new(blob.namespace, blob.share_version, true)?;
        builder.write_sequence_len(sequence_len)?;

        let mut raw_data: &[u8] = &blob.data;
        loop {
            match builder.add_data(raw_data) {
                Some(leftover) => {
                    self.shares.push(builder.build()?);
                    builder = ShareBuilder::new(blob.namespace, blob.share_version, false)?;
                    raw_data = leftover;
                }
                None => {
                    builder.zero_pad_if_necessary();
                    self.shares.push(builder.build()?);
                    break;
                }
            }
        }
        debug!(
            sequence_len,
            total_shares = self.shares.len(),
            "blob written to splitter"
        );
        Ok(())
    }

    /// Appends `count` namespace padding shares stamped with the namespace
    /// of the most recently written share. Padding needs a reference
    /// namespace, so at least one share must have been written before.
    pub fn write_namespace_padding_shares(&mut self, count: isize) -> Result<(), ShareError> {
        if count < 0 {
            return Err(ShareError::InvalidArgument(
                "cannot write a negative number of namespace padding shares".into(),
            ));
        }
        if count == 0 {
            return Ok(());
        }
        let Some(last) = self.shares.last() else {
            return Err(ShareError::EmptyState);
        };
        let namespace = last.namespace()?;
        self.shares
            .extend(namespace_padding_shares(namespace, count as usize)?);
        Ok(())
    }

    /// Returns the accumulated shares. Does not reset state.
    pub fn export(&self) -> Vec<Share> {
        self.shares.clone()
    }

    /// Current number of shares that would be exported.
    pub fn count(&self) -> usize {
        self.shares.len()
    }
}

/// Splits the provided blobs into shares, preserving input order.
pub fn split_blobs(blobs: &[Blob]) -> Result<Vec<Share>, ShareError> {
    let mut writer = SparseShareSplitter::new();
    for blob in blobs {
        writer.write(blob)?;
    }
    Ok(writer.export())
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;
    use crate::consts::{
        FIRST_SPARSE_SHARE_CONTENT_SIZE, NAMESPACE_ID_SIZE, SHARE_VERSION_ZERO,
    };
    use crate::namespace::Namespace;
    use crate::share::sparse_shares_needed;

    fn namespace(last: u8) -> Namespace {
        let mut id = [0u8; NAMESPACE_ID_SIZE];
        id[NAMESPACE_ID_SIZE - 1] = last;
        Namespace::new(0, &id).unwrap()
    }

    fn blob(last: u8, len: usize) -> Blob {
        let mut data = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut data);
        Blob::new(namespace(last), data, SHARE_VERSION_ZERO)
    }

    fn reconstruct(shares: &[Share]) -> Vec<u8> {
        let sequence_len = shares[0].sequence_len().unwrap() as usize;
        let mut data: Vec<u8> = shares
            .iter()
            .flat_map(|s| s.raw_data().unwrap().to_vec())
            .collect();
        data.truncate(sequence_len);
        data
    }

    #[test]
    fn small_blob_takes_one_share() {
        let blob = blob(1, 100);
        let mut splitter = SparseShareSplitter::new();
        splitter.write(&blob).unwrap();
        let shares = splitter.export();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].sequence_len().unwrap(), 100);
        assert_eq!(reconstruct(&shares), blob.data);
    }

    #[test]
    fn payload_one_byte_over_first_capacity_takes_two_shares() {
        let blob = blob(1, FIRST_SPARSE_SHARE_CONTENT_SIZE + 1);
        let mut splitter = SparseShareSplitter::new();
        splitter.write(&blob).unwrap();
        let shares = splitter.export();
        assert_eq!(shares.len(), 2);
        assert_eq!(
            shares[0].sequence_len().unwrap() as usize,
            FIRST_SPARSE_SHARE_CONTENT_SIZE + 1
        );
        assert!(shares[0].is_sequence_start().unwrap());
        assert!(!shares[1].is_sequence_start().unwrap());
        // Continuation share carries one payload byte, the rest is zeros.
        let tail = shares[1].raw_data().unwrap();
        assert!(tail[1..].iter().all(|b| *b == 0));
        assert_eq!(reconstruct(&shares), blob.data);
    }

    #[test]
    fn only_the_first_share_is_a_sequence_start() {
        let blob = blob(1, FIRST_SPARSE_SHARE_CONTENT_SIZE * 4);
        let mut splitter = SparseShareSplitter::new();
        splitter.write(&blob).unwrap();
        let shares = splitter.export();
        let starts: Vec<bool> = shares
            .iter()
            .map(|s| s.is_sequence_start().unwrap())
            .collect();
        assert_eq!(starts.iter().filter(|s| **s).count(), 1);
        assert!(starts[0]);
        let nonzero_lens = shares
            .iter()
            .filter(|s| s.sequence_len().unwrap() != 0)
            .count();
        assert_eq!(nonzero_lens, 1);
    }

    #[test]
    fn share_count_matches_estimator() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let len = (rng.next_u32() % 10_000) as usize + 1;
            let blob = blob(1, len);
            let mut splitter = SparseShareSplitter::new();
            splitter.write(&blob).unwrap();
            assert_eq!(
                splitter.count(),
                sparse_shares_needed(len as u32),
                "length {len}"
            );
        }
    }

    #[test]
    fn blob_order_is_preserved() {
        let blobs = [blob(3, 10), blob(1, 10), blob(2, 10)];
        let shares = split_blobs(&blobs).unwrap();
        assert_eq!(shares.len(), 3);
        for (share, blob) in shares.iter().zip(&blobs) {
            assert_eq!(share.namespace().unwrap(), blob.namespace);
        }
    }

    #[test]
    fn unsupported_share_version_is_rejected() {
        let blob = Blob::new(namespace(1), vec![1, 2, 3], 9);
        let mut splitter = SparseShareSplitter::new();
        assert!(matches!(
            splitter.write(&blob),
            Err(ShareError::UnsupportedShareVersion(9))
        ));
        assert_eq!(splitter.count(), 0);
    }

    #[test]
    fn padding_uses_last_written_namespace() {
        let mut splitter = SparseShareSplitter::new();
        splitter.write(&blob(5, 10)).unwrap();
        splitter.write_namespace_padding_shares(2).unwrap();
        let shares = splitter.export();
        assert_eq!(shares.len(), 3);
        for share in &shares[1..] {
            assert!(share.is_padding().unwrap());
            assert!(share.is_sequence_start().unwrap());
            assert_eq!(share.sequence_len().unwrap(), 0);
            assert_eq!(share.namespace().unwrap(), namespace(5));
        }
    }

    #[test]
    fn zero_padding_count_is_a_noop() {
        let mut splitter = SparseShareSplitter::new();
        splitter.write(&blob(1, 10)).unwrap();
        let before = splitter.count();
        splitter.write_namespace_padding_shares(0).unwrap();
        assert_eq!(splitter.count(), before);
    }

    #[test]
    fn padding_on_empty_splitter_fails() {
        let mut splitter = SparseShareSplitter::new();
        assert!(matches!(
            splitter.write_namespace_padding_shares(1),
            Err(ShareError::EmptyState)
        ));
        // A zero count short-circuits before the empty-state check.
        assert!(splitter.write_namespace_padding_shares(0).is_ok());
    }

    #[test]
    fn negative_padding_count_fails() {
        let mut splitter = SparseShareSplitter::new();
        splitter.write(&blob(1, 10)).unwrap();
        assert!(matches!(
            splitter.write_namespace_padding_shares(-1),
            Err(ShareError::InvalidArgument(_))
        ));
    }

    #[test]
    fn export_is_idempotent() {
        let mut splitter = SparseShareSplitter::new();
        splitter.write(&blob(1, 10)).unwrap();
        let first = splitter.export();
        let second = splitter.export();
        assert_eq!(first, second);
        splitter.write(&blob(2, 10)).unwrap();
        assert_eq!(splitter.export().len(), first.len() + 1);
    }

    #[test]
    fn multi_share_round_trip() {
        let blob = blob(9, FIRST_SPARSE_SHARE_CONTENT_SIZE * 3 + 17);
        let mut splitter = SparseShareSplitter::new();
        splitter.write(&blob).unwrap();
        assert_eq!(reconstruct(&splitter.export()), blob.data);
    }
}
