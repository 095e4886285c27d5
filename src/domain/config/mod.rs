//! Pipeline configuration
//!
//! Every table the pipeline depends on (codec and resolution ranks, audio
//! renditions, input naming, tool names) lives here so the scorer and the
//! playlist assembler can be exercised with substituted configurations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::errors::DomainError;

/// Largest rank allowed in a scoring table. The decimal score encoding
/// needs single-digit ranks.
pub const MAX_RANK: u8 = 9;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub inputs: InputConfig,
    pub scoring: ScoringConfig,
    pub audio: AudioConfig,
    pub subtitles: SubtitleConfig,
    pub segmenting: SegmentingConfig,
    pub tools: ToolConfig,
    pub transcription: TranscriptionConfig,
}

/// Naming conventions of the input directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub video_extension: String,
    pub audio_extension: String,
    pub subtitle_extension: String,
    pub subtitle_prefix: String,
    pub metadata_prefix: String,
    pub playlist_name: String,
    pub poster_name: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            video_extension: ".mov".to_string(),
            audio_extension: ".m4a".to_string(),
            subtitle_extension: ".vtt".to_string(),
            subtitle_prefix: "subs-".to_string(),
            metadata_prefix: "meta-".to_string(),
            playlist_name: "index.m3u8".to_string(),
            poster_name: "poster.jpeg".to_string(),
        }
    }
}

/// Variant ranking tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub codec_ranks: BTreeMap<String, u8>,
    pub resolution_ranks: BTreeMap<String, u8>,
    /// Codec token of audio-only variants; these carry no score
    pub audio_codec: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let codec_ranks = [("avc", 1), ("hevc", 2)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let resolution_ranks = [
            ("540p", 1),
            ("720p", 2),
            ("1080p", 3),
            ("1440p", 4),
            ("2160p", 5),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            codec_ranks,
            resolution_ranks,
            audio_codec: "aac".to_string(),
        }
    }
}

/// One audio rendition group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioGroup {
    pub group_id: String,
    pub language: String,
    pub name: String,
    pub codec: String,
}

/// Audio renditions and how variants pick one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub groups: Vec<AudioGroup>,
    /// Variant height that selects the low-bitrate group
    pub low_resolution_threshold: u32,
    pub low_resolution_group: String,
    pub high_resolution_group: String,
}

impl AudioConfig {
    /// Group used by a variant of the given height
    pub fn group_for_height(&self, height: u32) -> Result<&AudioGroup, DomainError> {
        let group_id = if height == self.low_resolution_threshold {
            &self.low_resolution_group
        } else {
            &self.high_resolution_group
        };

        self.groups
            .iter()
            .find(|g| &g.group_id == group_id)
            .ok_or_else(|| DomainError::Config(format!("Audio group not defined: {}", group_id)))
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            groups: vec![
                AudioGroup {
                    group_id: "aac-lc-128".to_string(),
                    language: "en".to_string(),
                    name: "English".to_string(),
                    codec: "mp4a.40.2".to_string(),
                },
                AudioGroup {
                    group_id: "aac-he-64".to_string(),
                    language: "en".to_string(),
                    name: "English".to_string(),
                    codec: "mp4a.40.5".to_string(),
                },
            ],
            low_resolution_threshold: 540,
            low_resolution_group: "aac-he-64".to_string(),
            high_resolution_group: "aac-lc-128".to_string(),
        }
    }
}

/// Subtitle and metadata rendition groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleConfig {
    pub group_id: String,
    pub metadata_group_id: String,
    pub characteristics: String,
    /// Tracks in this language are flagged DEFAULT=YES
    pub default_language: String,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            group_id: "subtitles".to_string(),
            metadata_group_id: "metadata".to_string(),
            characteristics: "public.accessibility.transcribes-spoken-dialog,public.accessibility.describes-music-and-sound".to_string(),
            default_language: "en".to_string(),
        }
    }
}

/// Segment durations in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentingConfig {
    pub media_segment_seconds: u32,
    pub subtitle_segment_seconds: u32,
}

impl Default for SegmentingConfig {
    fn default() -> Self {
        Self {
            media_segment_seconds: 6,
            subtitle_segment_seconds: 60,
        }
    }
}

/// External program names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub media_segmenter: String,
    pub subtitle_segmenter: String,
    pub playlist_creator: String,
    pub file_probe: String,
    pub audio_probe: String,
    pub audio_converter: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            media_segmenter: "mediafilesegmenter".to_string(),
            subtitle_segmenter: "mediasubtitlesegmenter".to_string(),
            playlist_creator: "variantplaylistcreator".to_string(),
            file_probe: "file".to_string(),
            audio_probe: "afinfo".to_string(),
            audio_converter: "afconvert".to_string(),
        }
    }
}

/// Speech-to-text engine settings.
///
/// Relative `whisper_binary` and `model` paths are anchored at the
/// directory holding the running executable, see [`TranscriptionConfig::anchor_paths`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    pub whisper_binary: String,
    pub model: String,
    pub sample_rate: u32,
    pub channels: u32,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            whisper_binary: "local/whisper.cpp/main".to_string(),
            model: "local/whisper.cpp/models/ggml-large-v2.bin".to_string(),
            sample_rate: 16000,
            channels: 1,
        }
    }
}

impl TranscriptionConfig {
    /// Join relative paths onto `base`. A bare program name such as
    /// `whisper-cli` is left alone so it is looked up on `PATH`.
    pub fn anchor_paths(&mut self, base: &Path) {
        let binary = Path::new(&self.whisper_binary);
        if binary.is_relative() && binary.components().count() > 1 {
            self.whisper_binary = base.join(binary).to_string_lossy().into_owned();
        }

        let model = Path::new(&self.model);
        if model.is_relative() {
            self.model = base.join(model).to_string_lossy().into_owned();
        }
    }
}

impl PipelineConfig {
    /// Check the invariants the scorer and assembler rely on
    pub fn validate(&self) -> Result<(), DomainError> {
        for (table, ranks) in [
            ("codec", &self.scoring.codec_ranks),
            ("resolution", &self.scoring.resolution_ranks),
        ] {
            if ranks.is_empty() {
                return Err(DomainError::Config(format!("{} rank table is empty", table)));
            }
            for (token, rank) in ranks {
                if *rank == 0 || *rank > MAX_RANK {
                    return Err(DomainError::Config(format!(
                        "{} rank for {} must be between 1 and {}, got {}",
                        table, token, MAX_RANK, rank
                    )));
                }
            }
        }

        if self.scoring.codec_ranks.contains_key(&self.scoring.audio_codec) {
            return Err(DomainError::Config(format!(
                "audio codec {} must not be ranked",
                self.scoring.audio_codec
            )));
        }

        for group_id in [
            &self.audio.low_resolution_group,
            &self.audio.high_resolution_group,
        ] {
            if !self.audio.groups.iter().any(|g| &g.group_id == group_id) {
                return Err(DomainError::Config(format!(
                    "audio assignment references undefined group {}",
                    group_id
                )));
            }
        }

        let inputs = &self.inputs;
        for (key, value) in [
            ("video_extension", &inputs.video_extension),
            ("audio_extension", &inputs.audio_extension),
            ("subtitle_extension", &inputs.subtitle_extension),
            ("metadata_prefix", &inputs.metadata_prefix),
            ("playlist_name", &inputs.playlist_name),
        ] {
            if value.is_empty() {
                return Err(DomainError::Config(format!("inputs.{} must not be empty", key)));
            }
        }

        if self.transcription.sample_rate == 0 {
            return Err(DomainError::Config(
                "transcription.sample_rate must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rank_above_nine_rejected() {
        let mut config = PipelineConfig::default();
        config.scoring.resolution_ranks.insert("4320p".to_string(), 10);

        let err = config.validate().unwrap_err();
        assert!(matches!(err, DomainError::Config(msg) if msg.contains("4320p")));
    }

    #[test]
    fn test_undefined_assignment_group_rejected() {
        let mut config = PipelineConfig::default();
        config.audio.low_resolution_group = "opus-48".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_group_for_height() {
        let audio = AudioConfig::default();
        assert_eq!(audio.group_for_height(540).unwrap().codec, "mp4a.40.5");
        assert_eq!(audio.group_for_height(1080).unwrap().codec, "mp4a.40.2");
        assert_eq!(audio.group_for_height(720).unwrap().group_id, "aac-lc-128");
    }

    #[test]
    fn test_whisper_paths_anchored_at_base() {
        let base = Path::new("/opt/hlsprep/bin");

        let mut transcription = TranscriptionConfig::default();
        transcription.anchor_paths(base);
        assert_eq!(
            Path::new(&transcription.whisper_binary),
            base.join("local/whisper.cpp/main")
        );
        assert_eq!(
            Path::new(&transcription.model),
            base.join("local/whisper.cpp/models/ggml-large-v2.bin")
        );

        let mut transcription = TranscriptionConfig {
            whisper_binary: "whisper-cli".to_string(),
            model: "/models/ggml-base.bin".to_string(),
            ..TranscriptionConfig::default()
        };
        transcription.anchor_paths(base);
        assert_eq!(transcription.whisper_binary, "whisper-cli");
        assert_eq!(transcription.model, "/models/ggml-base.bin");
    }
}
