// std
// crates
use itertools::izip;
use serde::{Deserialize, Serialize};
use tracing::debug;
// internal
use da_share::{Namespace, Share};

use crate::error::ProofError;
use crate::row_proof::RowProof;
use crate::{MerkleVerifier, NamespacedVerifier};

/// Proof that a set of shares exists in a set of rows and that those rows
/// exist in a Merkle tree with a given data root.
///
/// There is one namespaced proof per row the shares occupy; the shares in
/// `data` are partitioned across rows by each proof's declared leaf span.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShareProof<P, N> {
    /// Raw shares being proven.
    pub data: Vec<Vec<u8>>,
    /// Namespaced proofs, one per row.
    pub share_proofs: Vec<N>,
    /// Namespace id the shares are claimed to belong to. Verification
    /// fails if it does not match the namespace encoded in the shares.
    pub namespace_id: Vec<u8>,
    pub row_proof: RowProof<P>,
    pub namespace_version: u32,
}

impl<P, N> ShareProof<P, N> {
    /// Verifies the proof against the expected data root.
    ///
    /// Structural and namespace mismatches surface as
    /// [`ProofError::ProofMismatch`] before any cryptographic check; a
    /// failed Merkle or namespaced check surfaces as
    /// [`ProofError::VerificationFailed`].
    pub fn verify<MV, NV>(
        &self,
        root: &[u8],
        merkle: &MV,
        namespaced: &NV,
    ) -> Result<(), ProofError>
    where
        MV: MerkleVerifier<Proof = P>,
        NV: NamespacedVerifier<Proof = N>,
    {
        let namespace = self.claimed_namespace()?;
        self.validate_structure(namespaced)?;
        self.validate_share_namespaces(namespace)?;

        let mut cursor = 0usize;
        for (proof, row_root) in izip!(&self.share_proofs, &self.row_proof.row_roots) {
            let span = namespaced.shares_covered(proof);
            let leaves: Vec<&[u8]> = self.data[cursor..cursor + span]
                .iter()
                .map(Vec::as_slice)
                .collect();
            if !namespaced.verify_namespace(
                proof,
                namespace.version(),
                namespace.id(),
                &leaves,
                row_root,
            ) {
                return Err(ProofError::VerificationFailed {
                    reason: format!(
                        "shares {}..{} do not verify against their row root",
                        cursor,
                        cursor + span
                    ),
                });
            }
            cursor += span;
        }

        self.row_proof.verify(root, merkle)?;
        debug!(shares = self.data.len(), "share proof verified");
        Ok(())
    }

    fn claimed_namespace(&self) -> Result<Namespace, ProofError> {
        let version = u8::try_from(self.namespace_version).map_err(|_| {
            ProofError::ProofMismatch {
                reason: format!(
                    "namespace version {} does not fit a single byte",
                    self.namespace_version
                ),
            }
        })?;
        Ok(Namespace::new(version, &self.namespace_id)?)
    }

    fn validate_structure<NV>(&self, namespaced: &NV) -> Result<(), ProofError>
    where
        NV: NamespacedVerifier<Proof = N>,
    {
        if self.data.is_empty() {
            return Err(ProofError::ProofMismatch {
                reason: "no shares to prove".into(),
            });
        }
        self.row_proof.validate_structure()?;
        if self.share_proofs.len() != self.row_proof.rows() {
            return Err(ProofError::ProofMismatch {
                reason: format!(
                    "row proof covers {} rows but there are {} share proofs",
                    self.row_proof.rows(),
                    self.share_proofs.len()
                ),
            });
        }
        let covered: usize = self
            .share_proofs
            .iter()
            .map(|proof| namespaced.shares_covered(proof))
            .sum();
        if covered != self.data.len() {
            return Err(ProofError::ProofMismatch {
                reason: format!(
                    "share proofs cover {} leaves but {} shares are supplied",
                    covered,
                    self.data.len()
                ),
            });
        }
        Ok(())
    }

    /// Every proven share must carry the claimed namespace, independent of
    /// whether the cryptographic checks would pass.
    fn validate_share_namespaces(&self, namespace: Namespace) -> Result<(), ProofError> {
        for (i, raw) in self.data.iter().enumerate() {
            let share = Share::new(raw.clone())?;
            let share_namespace = share.namespace()?;
            if share_namespace != namespace {
                return Err(ProofError::ProofMismatch {
                    reason: format!(
                        "share {i} is in a different namespace than the claimed one"
                    ),
                });
            }
        }
        Ok(())
    }
}
