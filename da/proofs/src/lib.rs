//! Inclusion proofs over a two-dimensional data square.
//!
//! Namespace-range proofs are only meaningful within a row, so share
//! inclusion is necessarily proved in two levels: a namespaced proof per
//! row the shares occupy, and a Merkle proof anchoring those rows to the
//! data root. [`ShareProof`] composes both; [`RowProof`] is the simpler
//! row-to-root half on its own.
//!
//! The Merkle and namespaced-Merkle trees themselves are external
//! collaborators, consumed through [`MerkleVerifier`] and
//! [`NamespacedVerifier`].

pub mod data_hash;
mod error;
pub mod namespaced;
pub mod row_proof;
pub mod share_proof;
#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use data_hash::DataHash;
pub use error::ProofError;
pub use namespaced::{NamespacedRow, NamespacedShares};
pub use row_proof::RowProof;
pub use share_proof::ShareProof;

/// Capability interface over the external Merkle-tree implementation:
/// proves that `leaf` sits at `index` under `root`.
pub trait MerkleVerifier {
    type Proof;

    fn verify_inclusion(&self, proof: &Self::Proof, leaf: &[u8], index: u32, root: &[u8])
        -> bool;
}

/// Capability interface over the external namespaced-Merkle-tree
/// implementation: proves a contiguous run of leaves under a row root and
/// checks namespace ordering/completeness within the row.
pub trait NamespacedVerifier {
    type Proof;

    /// Number of leaves the proof declares to cover. Used to partition
    /// proven shares across the rows they span.
    fn shares_covered(&self, proof: &Self::Proof) -> usize;

    fn verify_namespace(
        &self,
        proof: &Self::Proof,
        namespace_version: u8,
        namespace_id: &[u8],
        leaves: &[&[u8]],
        root: &[u8],
    ) -> bool;
}
