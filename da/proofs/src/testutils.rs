//! Reference in-memory verifiers for exercising the proof model.
//!
//! These stand in for the external Merkle and namespaced-Merkle trees in
//! unit tests: a zero-padded binary SHA-256 tree with audit paths, and a
//! row verifier that binds leaves to their namespace by hashing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{MerkleVerifier, NamespacedVerifier};

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

pub type Hash = [u8; 32];

fn leaf_hash(leaf: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(leaf);
    hasher.finalize().into()
}

fn node_hash(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update([NODE_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Audit path from a leaf up to the root of the test Merkle tree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TestMerkleProof {
    pub index: u32,
    pub path: Vec<Hash>,
}

/// Builds a binary SHA-256 tree over `leaves`, padding the width to the
/// next power of two with zero hashes. Returns the root and one audit
/// path per input leaf.
pub fn build_merkle_tree(leaves: &[Vec<u8>]) -> (Hash, Vec<TestMerkleProof>) {
    let width = leaves.len().next_power_of_two().max(1);
    let mut level: Vec<Hash> = leaves.iter().map(|leaf| leaf_hash(leaf)).collect();
    level.resize(width, [0u8; 32]);

    let mut paths: Vec<Vec<Hash>> = vec![Vec::new(); leaves.len()];
    let mut positions: Vec<usize> = (0..leaves.len()).collect();
    while level.len() > 1 {
        for (leaf, position) in positions.iter_mut().enumerate() {
            paths[leaf].push(level[*position ^ 1]);
            *position /= 2;
        }
        level = level
            .chunks(2)
            .map(|pair| node_hash(&pair[0], &pair[1]))
            .collect();
    }

    let proofs = paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| TestMerkleProof {
            index: index as u32,
            path,
        })
        .collect();
    (level[0], proofs)
}

pub struct TestMerkleVerifier;

impl MerkleVerifier for TestMerkleVerifier {
    type Proof = TestMerkleProof;

    fn verify_inclusion(
        &self,
        proof: &Self::Proof,
        leaf: &[u8],
        index: u32,
        root: &[u8],
    ) -> bool {
        if proof.index != index {
            return false;
        }
        let mut acc = leaf_hash(leaf);
        let mut position = proof.index;
        for sibling in &proof.path {
            acc = if position & 1 == 1 {
                node_hash(sibling, &acc)
            } else {
                node_hash(&acc, sibling)
            };
            position >>= 1;
        }
        root == acc
    }
}

/// Leaf range within a row that a namespaced proof covers, `end`
/// exclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TestNamespacedProof {
    pub start: u32,
    pub end: u32,
}

/// Row root binding leaves to their namespace:
/// `sha256(version || id || leaves…)`.
pub fn namespaced_row_root(version: u8, id: &[u8], leaves: &[&[u8]]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update([version]);
    hasher.update(id);
    for leaf in leaves {
        hasher.update(leaf);
    }
    hasher.finalize().to_vec()
}

pub struct TestRowVerifier;

impl NamespacedVerifier for TestRowVerifier {
    type Proof = TestNamespacedProof;

    fn shares_covered(&self, proof: &Self::Proof) -> usize {
        proof.end.saturating_sub(proof.start) as usize
    }

    fn verify_namespace(
        &self,
        proof: &Self::Proof,
        namespace_version: u8,
        namespace_id: &[u8],
        leaves: &[&[u8]],
        root: &[u8],
    ) -> bool {
        if self.shares_covered(proof) != leaves.len() {
            return false;
        }
        root == namespaced_row_root(namespace_version, namespace_id, leaves).as_slice()
    }
}
