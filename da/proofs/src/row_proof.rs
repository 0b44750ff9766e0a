use itertools::izip;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProofError;
use crate::MerkleVerifier;

/// Merkle proof that a contiguous run of rows exists in a Merkle tree with
/// a given data root.
///
/// `row_roots[i]` is proven by `proofs[i]` as the leaf at index
/// `start_row + i`; the range `[start_row, end_row]` is inclusive.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RowProof<P> {
    pub row_roots: Vec<Vec<u8>>,
    pub proofs: Vec<P>,
    pub start_row: u32,
    pub end_row: u32,
}

impl<P> RowProof<P> {
    /// Number of rows the proof claims to cover.
    pub fn rows(&self) -> usize {
        (self.end_row.saturating_sub(self.start_row) + 1) as usize
    }

    /// Structural validity: as many roots as proofs, and both matching the
    /// claimed row range. Rejected here before any cryptographic work.
    pub fn validate_structure(&self) -> Result<(), ProofError> {
        if self.end_row < self.start_row {
            return Err(ProofError::ProofMismatch {
                reason: format!(
                    "row range [{}, {}] is inverted",
                    self.start_row, self.end_row
                ),
            });
        }
        if self.row_roots.len() != self.proofs.len() || self.row_roots.len() != self.rows() {
            return Err(ProofError::ProofMismatch {
                reason: format!(
                    "expected {} roots and proofs for row range [{}, {}], got {} roots and {} proofs",
                    self.rows(),
                    self.start_row,
                    self.end_row,
                    self.row_roots.len(),
                    self.proofs.len()
                ),
            });
        }
        Ok(())
    }

    /// Verifies every row root against `root` through the external Merkle
    /// verifier.
    pub fn verify<V>(&self, root: &[u8], verifier: &V) -> Result<(), ProofError>
    where
        V: MerkleVerifier<Proof = P>,
    {
        self.validate_structure()?;
        for (i, (row_root, proof)) in izip!(&self.row_roots, &self.proofs).enumerate() {
            let index = self.start_row + i as u32;
            if !verifier.verify_inclusion(proof, row_root, index, root) {
                return Err(ProofError::VerificationFailed {
                    reason: format!("row root at index {index} does not belong to the data root"),
                });
            }
        }
        debug!(
            start_row = self.start_row,
            end_row = self.end_row,
            "row proof verified"
        );
        Ok(())
    }
}
