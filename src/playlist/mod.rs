//! Playlist module
//!
//! This module handles the multivariant playlist:
//! - Typed manifest lines and immutable line sequences
//! - `#EXT-X-MEDIA` declarations for audio, subtitle and metadata renditions
//! - Rewriting of `#EXT-X-STREAM-INF` entries with audio and subtitle groups

pub mod assembler;
pub mod line;
pub mod media;

pub use assembler::PlaylistAssembler;
pub use line::{LineKind, Manifest, PlaylistLine};
pub use media::{MediaDeclaration, MediaType};
