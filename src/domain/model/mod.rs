// Domain models - Core types and data structures

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Kind of a discovered input asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Video,
    Audio,
    /// `<lang>[-<region>].vtt`
    SubtitleLegacy,
    /// `subs-<lang>[-<region>].vtt`
    SubtitlePrefixed,
    MetadataDir,
}

/// A single input file or directory recognised during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAsset {
    pub path: PathBuf,
    pub kind: AssetKind,
}

impl TrackAsset {
    pub fn new(path: impl Into<PathBuf>, kind: AssetKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// File name as a string, lossy for non UTF-8 names
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// File name without its final extension; this is the variant identifier
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Subtitle track with resolved language metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTrack {
    pub filename: String,
    /// Lower-cased ISO 639-1 code
    pub language: String,
    /// Lower-cased ISO 3166-1 alpha-2 code
    pub region: Option<String>,
    pub display_name: String,
    pub output_dir: String,
}

impl SubtitleTrack {
    /// Output directory for a language and optional region, e.g. `subs-en-us`
    pub fn output_dir_for(prefix: &str, language: &str, region: Option<&str>) -> String {
        match region {
            Some(region) => format!("{}{}-{}", prefix, language, region),
            None => format!("{}{}", prefix, language),
        }
    }
}

/// Pre-built timed-metadata rendition copied into the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTrack {
    pub name: String,
    pub output_dir: String,
}

/// Ordinal score of a variant: codec rank first, resolution rank second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub codec_rank: u8,
    pub resolution_rank: u8,
}

impl Score {
    pub fn new(codec_rank: u8, resolution_rank: u8) -> Self {
        Self {
            codec_rank,
            resolution_rank,
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.codec_rank
            .cmp(&other.codec_rank)
            .then(self.resolution_rank.cmp(&other.resolution_rank))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Decimal encoding handed to the segmenter. Ranks are single digits, so
/// `codec + resolution / 10` sorts the same way as the pair.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.codec_rank, self.resolution_rank)
    }
}

/// One segmented variant, as handed to the base-playlist creator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub id: String,
    pub playlist_url: String,
    pub sidecar_path: String,
    pub score: Option<Score>,
    pub iframe_url: Option<String>,
}

impl VariantDescriptor {
    pub fn new(id: &str, playlist_name: &str, score: Option<Score>, with_iframes: bool) -> Self {
        Self {
            id: id.to_string(),
            playlist_url: format!("{}/{}", id, playlist_name),
            sidecar_path: format!("{}/{}.plist", id, id),
            score,
            iframe_url: with_iframes.then(|| format!("{}/iframe_{}", id, playlist_name)),
        }
    }
}

/// Vertical placement of a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuePosition {
    Top,
    Bottom,
}

impl CuePosition {
    /// WebVTT cue setting for this bucket
    pub fn cue_setting(&self) -> &'static str {
        match self {
            CuePosition::Top => "line:5%",
            CuePosition::Bottom => "line:95%",
        }
    }
}

/// Cue timestamp in WebVTT form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl CueTime {
    /// Offset from the start of the document in milliseconds
    pub fn offset_ms(&self) -> u64 {
        (self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64) * 1000
            + self.millis as u64
    }
}

impl fmt::Display for CueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

/// One timed text entry. Start is not checked against end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub start: CueTime,
    pub end: CueTime,
    pub text: String,
    pub italic: bool,
    pub position: CuePosition,
}

/// External program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// Directory listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Request to build a bundle from an input directory
#[derive(Debug, Clone)]
pub struct PackageRequest {
    pub input_dir: PathBuf,
}

/// Outcome of a bundle build
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub output_dir: PathBuf,
    pub variants: Vec<VariantDescriptor>,
    pub subtitle_tracks: Vec<SubtitleTrack>,
    pub metadata_tracks: Vec<MetadataTrack>,
}

/// Request to convert a timed-text file to WebVTT
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub fps: u32,
}

/// Request to transcribe audio files to WebVTT
#[derive(Debug, Clone)]
pub struct TranscribeRequest {
    pub inputs: Vec<PathBuf>,
}
