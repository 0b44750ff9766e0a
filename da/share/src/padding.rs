//! Padding share constructors.
//!
//! All padding forms are namespace-padding shaped: a sequence-start share
//! with a zero sequence length and an all-zero payload. Tail and reserved
//! padding fix the namespace to their dedicated reserved values.

use crate::builder::ShareBuilder;
use crate::consts::SHARE_VERSION_ZERO;
use crate::error::ShareError;
use crate::namespace::Namespace;
use crate::share::Share;

/// A padding share stamped with `namespace`.
pub fn namespace_padding_share(namespace: Namespace) -> Result<Share, ShareError> {
    let mut builder = ShareBuilder::new(namespace, SHARE_VERSION_ZERO, true)?;
    builder.write_sequence_len(0)?;
    builder.zero_pad_if_necessary();
    builder.build()
}

pub fn namespace_padding_shares(
    namespace: Namespace,
    count: usize,
) -> Result<Vec<Share>, ShareError> {
    (0..count).map(|_| namespace_padding_share(namespace)).collect()
}

/// A share padding the square out to its full size.
pub fn tail_padding_share() -> Result<Share, ShareError> {
    namespace_padding_share(Namespace::TAIL_PADDING)
}

pub fn tail_padding_shares(count: usize) -> Result<Vec<Share>, ShareError> {
    namespace_padding_shares(Namespace::TAIL_PADDING, count)
}

/// A share padding the primary reserved area of the square.
pub fn reserved_padding_share() -> Result<Share, ShareError> {
    namespace_padding_share(Namespace::PRIMARY_RESERVED_PADDING)
}

pub fn reserved_padding_shares(count: usize) -> Result<Vec<Share>, ShareError> {
    namespace_padding_shares(Namespace::PRIMARY_RESERVED_PADDING, count)
}
