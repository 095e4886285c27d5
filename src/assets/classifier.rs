//! Input directory classification

use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::domain::config::InputConfig;
use crate::domain::errors::DomainError;
use crate::domain::model::{AssetKind, DirEntry, MetadataTrack, SubtitleTrack, TrackAsset};
use crate::language::LanguageResolver;

/// Typed tracks found in an input directory, each list in name order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedAssets {
    pub videos: Vec<TrackAsset>,
    pub audios: Vec<TrackAsset>,
    pub subtitles: Vec<SubtitleTrack>,
    /// Candidate metadata directories; accepted once their manifest is found
    pub metadata_dirs: Vec<TrackAsset>,
}

/// Partitions a directory listing into video, audio, subtitle and metadata assets
pub struct AssetClassifier<'a> {
    config: &'a InputConfig,
    resolver: &'a LanguageResolver,
    subtitle_pattern: Regex,
}

impl<'a> AssetClassifier<'a> {
    /// Create a classifier for the configured naming conventions
    pub fn new(config: &'a InputConfig, resolver: &'a LanguageResolver) -> Result<Self, DomainError> {
        let pattern = format!(
            r"(?i)^(?P<prefix>{})?(?P<lang>[a-z]{{2}})(?:-(?P<region>[a-z]{{2}}))?{}$",
            regex::escape(&config.subtitle_prefix),
            regex::escape(&config.subtitle_extension),
        );
        let subtitle_pattern = Regex::new(&pattern)
            .map_err(|e| DomainError::Config(format!("Invalid subtitle pattern: {}", e)))?;

        Ok(Self {
            config,
            resolver,
            subtitle_pattern,
        })
    }

    /// Classify a directory listing.
    ///
    /// Entries that match no asset kind (poster, stray files) are ignored,
    /// except files with the subtitle extension: those must be well named.
    pub fn classify(&self, entries: &[DirEntry]) -> Result<ClassifiedAssets, DomainError> {
        let mut sorted: Vec<&DirEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut assets = ClassifiedAssets::default();
        let mut seen_outputs: HashMap<String, String> = HashMap::new();

        for entry in sorted {
            if entry.is_dir() {
                if entry.name.starts_with(&self.config.metadata_prefix) {
                    assets
                        .metadata_dirs
                        .push(TrackAsset::new(&entry.name, AssetKind::MetadataDir));
                }
                continue;
            }
            if !entry.is_file() {
                continue;
            }

            let name = entry.name.as_str();
            if name.ends_with(&self.config.video_extension) {
                assets.videos.push(TrackAsset::new(name, AssetKind::Video));
            } else if name.ends_with(&self.config.audio_extension) {
                assets.audios.push(TrackAsset::new(name, AssetKind::Audio));
            } else if name.ends_with(&self.config.subtitle_extension) {
                let (_, track) = self.classify_subtitle(name)?;
                if let Some(first) = seen_outputs.insert(track.output_dir.clone(), name.to_string()) {
                    return Err(DomainError::DuplicateSubtitle {
                        output_dir: track.output_dir,
                        first,
                        second: name.to_string(),
                    });
                }
                assets.subtitles.push(track);
            } else {
                debug!("Ignoring {}", name);
            }
        }

        info!(
            "Classified {} video, {} audio, {} subtitle, {} metadata assets",
            assets.videos.len(),
            assets.audios.len(),
            assets.subtitles.len(),
            assets.metadata_dirs.len()
        );

        Ok(assets)
    }

    /// Parse a subtitle file name into its asset kind and track
    pub fn classify_subtitle(&self, filename: &str) -> Result<(AssetKind, SubtitleTrack), DomainError> {
        let captures = self
            .subtitle_pattern
            .captures(filename)
            .ok_or_else(|| DomainError::InvalidSubtitleName(filename.to_string()))?;

        let kind = if captures.name("prefix").is_some() {
            AssetKind::SubtitlePrefixed
        } else {
            AssetKind::SubtitleLegacy
        };
        let language = &captures["lang"];
        let region = captures.name("region").map(|m| m.as_str());

        let info = self.resolver.resolve_info(language, region);
        let output_dir = SubtitleTrack::output_dir_for(
            &self.config.subtitle_prefix,
            &info.language,
            info.region.as_deref(),
        );

        Ok((
            kind,
            SubtitleTrack {
                filename: filename.to_string(),
                language: info.language,
                region: info.region,
                display_name: info.display_name,
                output_dir,
            },
        ))
    }

    /// Metadata track for an accepted metadata directory
    pub fn metadata_track(&self, asset: &TrackAsset) -> MetadataTrack {
        let dir_name = asset.file_name();
        let name = dir_name
            .strip_prefix(&self.config.metadata_prefix)
            .unwrap_or(&dir_name)
            .to_string();

        MetadataTrack {
            name,
            output_dir: dir_name,
        }
    }

    /// Path of the manifest a metadata directory must contain
    pub fn metadata_manifest_path(&self, input_dir: &std::path::Path, asset: &TrackAsset) -> PathBuf {
        input_dir.join(&asset.path).join(&self.config.playlist_name)
    }
}
