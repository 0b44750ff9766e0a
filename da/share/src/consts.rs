//! Share geometry constants.
//!
//! These widths are consensus parameters of the consuming network. They are
//! the single source of truth for the codec, the splitter and the proof
//! layer; nothing else in the workspace hardcodes an offset.

/// System-wide size of a share in bytes, including the namespace.
pub const SHARE_SIZE: usize = 512;

/// Size of the namespace version field in bytes.
pub const NAMESPACE_VERSION_SIZE: usize = 1;

/// Size of the namespace id field in bytes.
pub const NAMESPACE_ID_SIZE: usize = 28;

/// Size of a full namespace (version + id) in bytes.
pub const NAMESPACE_SIZE: usize = NAMESPACE_VERSION_SIZE + NAMESPACE_ID_SIZE;

/// Size of the info byte in bytes.
pub const SHARE_INFO_BYTES: usize = 1;

/// Size of the sequence length field in bytes, big-endian unsigned.
pub const SEQUENCE_LEN_BYTES: usize = 4;

/// Size of the reserved offset field carried by compact shares, big-endian
/// unsigned.
pub const COMPACT_SHARE_RESERVED_BYTES: usize = 4;

/// Payload capacity of the first share of a sparse sequence.
pub const FIRST_SPARSE_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES - SEQUENCE_LEN_BYTES;

/// Payload capacity of a sparse continuation share.
pub const CONTINUATION_SPARSE_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES;

/// Payload capacity of the first share of a compact sequence.
pub const FIRST_COMPACT_SHARE_CONTENT_SIZE: usize =
    FIRST_SPARSE_SHARE_CONTENT_SIZE - COMPACT_SHARE_RESERVED_BYTES;

/// Payload capacity of a compact continuation share.
pub const CONTINUATION_COMPACT_SHARE_CONTENT_SIZE: usize =
    CONTINUATION_SPARSE_SHARE_CONTENT_SIZE - COMPACT_SHARE_RESERVED_BYTES;

/// The zero share version.
pub const SHARE_VERSION_ZERO: u8 = 0;

/// Share versions the splitter accepts.
pub const SUPPORTED_SHARE_VERSIONS: &[u8] = &[SHARE_VERSION_ZERO];

/// Largest share version representable in the info byte's 7 version bits.
pub const MAX_SHARE_VERSION: u8 = 127;
