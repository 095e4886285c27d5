//! `#EXT-X-MEDIA` rendition declarations

use crate::domain::config::{AudioGroup, SubtitleConfig};
use crate::domain::model::{MetadataTrack, SubtitleTrack};
use crate::playlist::line::{PlaylistLine, MEDIA_TAG};

/// Rendition TYPE attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Audio,
    Subtitles,
}

impl MediaType {
    fn as_str(&self) -> &'static str {
        match self {
            MediaType::Audio => "AUDIO",
            MediaType::Subtitles => "SUBTITLES",
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}

/// A media-group declaration. `None` attributes are left out of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDeclaration {
    pub media_type: MediaType,
    pub group_id: String,
    pub name: String,
    pub language: Option<String>,
    pub autoselect: Option<bool>,
    pub default: Option<bool>,
    pub forced: Option<bool>,
    pub characteristics: Option<String>,
    pub uri: String,
}

impl MediaDeclaration {
    /// Declaration for an audio rendition group
    pub fn audio(group: &AudioGroup, playlist_name: &str) -> Self {
        Self {
            media_type: MediaType::Audio,
            group_id: group.group_id.clone(),
            name: group.name.clone(),
            language: Some(group.language.clone()),
            autoselect: Some(true),
            default: Some(false),
            forced: Some(false),
            characteristics: None,
            uri: format!("{}/{}", group.group_id, playlist_name),
        }
    }

    /// Declaration for a subtitle track
    pub fn subtitle(track: &SubtitleTrack, config: &SubtitleConfig, playlist_name: &str) -> Self {
        Self {
            media_type: MediaType::Subtitles,
            group_id: config.group_id.clone(),
            name: track.display_name.clone(),
            language: Some(track.language.clone()),
            autoselect: Some(true),
            default: Some(track.language == config.default_language),
            forced: Some(false),
            characteristics: Some(config.characteristics.clone()),
            uri: format!("{}/{}", track.output_dir, playlist_name),
        }
    }

    /// Declaration for a timed-metadata track, delivered as a subtitle rendition
    pub fn metadata(track: &MetadataTrack, config: &SubtitleConfig, playlist_name: &str) -> Self {
        Self {
            media_type: MediaType::Subtitles,
            group_id: config.metadata_group_id.clone(),
            name: track.name.clone(),
            language: None,
            autoselect: None,
            default: None,
            forced: Some(false),
            characteristics: None,
            uri: format!("{}/{}", track.output_dir, playlist_name),
        }
    }

    /// Render as a manifest line with attributes in their fixed order
    pub fn to_line(&self) -> PlaylistLine {
        let mut parts = vec![
            format!("TYPE={}", self.media_type.as_str()),
            format!("GROUP-ID=\"{}\"", self.group_id),
            format!("NAME=\"{}\"", self.name),
        ];

        if let Some(language) = self.language.as_deref().filter(|l| !l.is_empty()) {
            parts.push(format!("LANGUAGE=\"{}\"", language));
        }
        if let Some(autoselect) = self.autoselect {
            parts.push(format!("AUTOSELECT={}", yes_no(autoselect)));
        }
        if let Some(default) = self.default {
            parts.push(format!("DEFAULT={}", yes_no(default)));
        }
        if let Some(forced) = self.forced {
            parts.push(format!("FORCED={}", yes_no(forced)));
        }
        if let Some(characteristics) = self.characteristics.as_deref().filter(|c| !c.is_empty()) {
            parts.push(format!("CHARACTERISTICS=\"{}\"", characteristics));
        }
        parts.push(format!("URI=\"{}\"", self.uri));

        PlaylistLine::parse(&format!("{}{}", MEDIA_TAG, parts.join(",")))
    }
}
