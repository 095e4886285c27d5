//! Multivariant playlist assembly
//!
//! The base playlist comes from the external playlist creator and only
//! lists the video variants. Assembly adds the rendition groups and points
//! every variant at its audio and subtitle groups.

use tracing::debug;

use crate::domain::config::{AudioConfig, PipelineConfig, SubtitleConfig};
use crate::domain::errors::DomainError;
use crate::domain::model::{MetadataTrack, SubtitleTrack};
use crate::playlist::line::{LineKind, Manifest, PlaylistLine};
use crate::playlist::media::MediaDeclaration;

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Rewrites a base playlist into the final manifest
pub struct PlaylistAssembler<'a> {
    audio: &'a AudioConfig,
    subtitles: &'a SubtitleConfig,
    playlist_name: &'a str,
}

impl<'a> PlaylistAssembler<'a> {
    pub fn new(audio: &'a AudioConfig, subtitles: &'a SubtitleConfig, playlist_name: &'a str) -> Self {
        Self {
            audio,
            subtitles,
            playlist_name,
        }
    }

    pub fn from_config(config: &'a PipelineConfig) -> Self {
        Self::new(&config.audio, &config.subtitles, &config.inputs.playlist_name)
    }

    /// Build the final manifest: media groups first, then stream rewriting
    pub fn assemble(
        &self,
        base: &Manifest,
        subtitle_tracks: &[SubtitleTrack],
        metadata_tracks: &[MetadataTrack],
    ) -> Result<Manifest, DomainError> {
        let with_groups = self.insert_media_groups(base, subtitle_tracks, metadata_tracks)?;
        self.rewrite_stream_entries(&with_groups, !subtitle_tracks.is_empty())
    }

    /// Rendition declarations in their fixed order: audio, subtitles, metadata
    pub fn media_block(
        &self,
        subtitle_tracks: &[SubtitleTrack],
        metadata_tracks: &[MetadataTrack],
    ) -> Vec<PlaylistLine> {
        let audio = self
            .audio
            .groups
            .iter()
            .map(|g| MediaDeclaration::audio(g, self.playlist_name));
        let subtitles = subtitle_tracks
            .iter()
            .map(|t| MediaDeclaration::subtitle(t, self.subtitles, self.playlist_name));
        let metadata = metadata_tracks
            .iter()
            .map(|t| MediaDeclaration::metadata(t, self.subtitles, self.playlist_name));

        audio
            .chain(subtitles)
            .chain(metadata)
            .map(|d| d.to_line())
            .collect()
    }

    /// Insert all rendition declarations before the first variant line
    pub fn insert_media_groups(
        &self,
        manifest: &Manifest,
        subtitle_tracks: &[SubtitleTrack],
        metadata_tracks: &[MetadataTrack],
    ) -> Result<Manifest, DomainError> {
        manifest.insert_before_streams(self.media_block(subtitle_tracks, metadata_tracks))
    }

    /// Attach audio (and subtitle) groups to every `#EXT-X-STREAM-INF` line.
    /// I-frame only variants carry no renditions and are left alone.
    pub fn rewrite_stream_entries(
        &self,
        manifest: &Manifest,
        has_subtitles: bool,
    ) -> Result<Manifest, DomainError> {
        manifest.map_lines(LineKind::StreamInf, |line| {
            self.rewrite_stream_line(line, has_subtitles)
        })
    }

    /// Rewrite one variant line
    pub fn rewrite_stream_line(
        &self,
        line: &PlaylistLine,
        has_subtitles: bool,
    ) -> Result<PlaylistLine, DomainError> {
        let height: u32 = regex!(r"RESOLUTION=\d+x(\d+)")
            .captures(line.text())
            .and_then(|c| c[1].parse().ok())
            .ok_or_else(|| DomainError::MissingResolution(line.text().to_string()))?;

        let group = self.audio.group_for_height(height)?;
        debug!("Variant height {} uses audio group {}", height, group.group_id);

        let codecs = regex!(r#"CODECS="[^"]+"#);
        let mut updated = match codecs.find(line.text()) {
            Some(m) => format!(
                "{},{}{}",
                &line.text()[..m.end()],
                group.codec,
                &line.text()[m.end()..]
            ),
            None => line.text().to_string(),
        };

        updated.push_str(&format!(",AUDIO=\"{}\"", group.group_id));
        if has_subtitles {
            updated.push_str(&format!(",SUBTITLES=\"{}\"", self.subtitles.group_id));
        }

        Ok(PlaylistLine::parse(&updated))
    }
}
