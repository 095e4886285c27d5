//! Timed-text conversion module
//!
//! Converts frame-based iTunes Timed Text into WebVTT:
//! - `HH:MM:SS:FF` timecodes to millisecond timestamps
//! - italic styling to `<i>` markup
//! - top/bottom regions to two fixed line positions

pub mod itt;
pub mod webvtt;

pub use itt::{parse_cues, parse_timecode};

use crate::domain::errors::DomainError;

/// Default frame rate of timed-text sources
pub const DEFAULT_FPS: u32 = 30;

/// Convert a timed-text document to a WebVTT document
pub fn convert(document: &str, fps: u32) -> Result<String, DomainError> {
    let cues = parse_cues(document, fps)?;
    Ok(webvtt::render(&cues))
}
