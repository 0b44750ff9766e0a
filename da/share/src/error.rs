use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("malformed share: expected {expected} bytes for {context}, got {got}")]
    MalformedShare {
        context: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("unsupported share version: {0}")]
    UnsupportedShareVersion(u8),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("cannot write namespace padding shares on an empty splitter")]
    EmptyState,
    #[error("share version {got} exceeds the maximum of {max}")]
    ShareVersionTooLarge { got: u8, max: u8 },
    #[error("namespace id must be {expected} bytes, got {got}")]
    InvalidNamespaceId { expected: usize, got: usize },
    #[error("sequence length can only be written to the first share of a sequence")]
    SequenceLenOnContinuationShare,
    #[error("sequence length has already been written")]
    SequenceLenAlreadyWritten,
    #[error("sequence length must be written before any payload data")]
    SequenceLenAfterData,
    #[error("first share of a sequence built without a sequence length")]
    MissingSequenceLen,
}
