//! Share codec and sparse share splitter for a two-dimensional
//! erasure-coded data square.
//!
//! Blobs are serialized into fixed-size shares by the
//! [`splitter::SparseShareSplitter`]; the [`share::Share`] accessors
//! classify and slice shares back apart. Field widths live in [`consts`]
//! and govern both directions.

pub mod blob;
pub mod builder;
pub mod consts;
mod error;
pub mod info_byte;
pub mod namespace;
pub mod padding;
pub mod share;
pub mod splitter;

pub use blob::{blobs_to_ordered_shares, blobs_to_shares, Blob};
pub use builder::ShareBuilder;
pub use error::ShareError;
pub use info_byte::InfoByte;
pub use namespace::Namespace;
pub use share::{
    parse_reserved_bytes, shares_from_bytes, shares_to_bytes, sparse_shares_needed, Share,
};
pub use splitter::{split_blobs, SparseShareSplitter};
