//! hlsprep
//!
//! Packages independently segmented video, audio, subtitle and metadata
//! tracks into a single HLS bundle, and converts the timed-text formats
//! used along the way:
//!
//! - `hls-prep`: classify an input directory, segment every track with the
//!   Apple HLS tools and assemble the multivariant playlist
//! - `itt-to-webvtt`: convert frame-based iTunes Timed Text to WebVTT
//! - `whisper-vtt`: transcribe audio to WebVTT with whisper.cpp

pub mod adapters;
pub mod app;
pub mod assets;
pub mod cli;
pub mod domain;
pub mod language;
pub mod playlist;
pub mod ports;
pub mod timed_text;

// Re-export commonly used types
pub use domain::config::PipelineConfig;
pub use domain::errors::DomainError;
pub use domain::model::{Cue, CueTime, Score, SubtitleTrack, ToolInvocation, VariantDescriptor};
pub use language::LanguageResolver;
pub use playlist::{Manifest, PlaylistAssembler};
