use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// Structural length mismatch between roots, proofs and the row range,
    /// or a namespace mismatch during verification. Detected before any
    /// cryptographic check runs.
    #[error("proof mismatch: {reason}")]
    ProofMismatch { reason: String },
    /// An underlying Merkle or namespaced-Merkle check failed.
    #[error("verification failed: {reason}")]
    VerificationFailed { reason: String },
    #[error("invalid data hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },
    #[error("invalid data hash hex: {0}")]
    InvalidHex(#[from] const_hex::FromHexError),
    #[error(transparent)]
    Share(#[from] da_share::ShareError),
}
