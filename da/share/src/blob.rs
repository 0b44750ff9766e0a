use serde::{Deserialize, Serialize};

use crate::error::ShareError;
use crate::namespace::Namespace;
use crate::share::{shares_to_bytes, Share};
use crate::splitter::split_blobs;

/// Namespaced payload to be split into shares. Immutable input; the
/// splitter never mutates it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    pub namespace: Namespace,
    pub data: Vec<u8>,
    pub share_version: u8,
}

impl Blob {
    pub fn new(namespace: Namespace, data: Vec<u8>, share_version: u8) -> Self {
        Self {
            namespace,
            data,
            share_version,
        }
    }
}

/// Converts blobs to raw share buffers for the square layout engine,
/// ordering the blobs by namespace first.
pub fn blobs_to_shares(mut blobs: Vec<Blob>) -> Result<Vec<Vec<u8>>, ShareError> {
    blobs.sort_by(|a, b| a.namespace.cmp(&b.namespace));
    let shares = split_blobs(&blobs)?;
    Ok(shares_to_bytes(&shares))
}

/// Splits blobs preserving the caller's ordering.
pub fn blobs_to_ordered_shares(blobs: &[Blob]) -> Result<Vec<Share>, ShareError> {
    split_blobs(blobs)
}
