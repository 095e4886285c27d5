//! Typed manifest lines
//!
//! A manifest is an immutable ordered sequence of lines. Transformations
//! return a new [`Manifest`]; no line is edited in place.

use std::fmt;

use crate::domain::errors::DomainError;

pub const STREAM_INF_TAG: &str = "#EXT-X-STREAM-INF:";
pub const IFRAME_STREAM_INF_TAG: &str = "#EXT-X-I-FRAME-STREAM-INF:";
pub const MEDIA_TAG: &str = "#EXT-X-MEDIA:";

/// Classification of a manifest line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#EXT-X-STREAM-INF:`
    StreamInf,
    /// `#EXT-X-I-FRAME-STREAM-INF:`
    IFrameStreamInf,
    /// `#EXT-X-MEDIA:`
    Media,
    /// Any other tag or comment
    Tag,
    Uri,
    Blank,
}

impl LineKind {
    /// Variant-selection lines, plain or I-frame only
    pub fn is_stream_selection(&self) -> bool {
        matches!(self, LineKind::StreamInf | LineKind::IFrameStreamInf)
    }
}

/// One manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistLine {
    kind: LineKind,
    text: String,
}

impl PlaylistLine {
    /// Classify raw text
    pub fn parse(text: &str) -> Self {
        let kind = if text.starts_with(STREAM_INF_TAG) {
            LineKind::StreamInf
        } else if text.starts_with(IFRAME_STREAM_INF_TAG) {
            LineKind::IFrameStreamInf
        } else if text.starts_with(MEDIA_TAG) {
            LineKind::Media
        } else if text.starts_with('#') {
            LineKind::Tag
        } else if text.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Uri
        };

        Self {
            kind,
            text: text.to_string(),
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for PlaylistLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Multivariant playlist as an ordered sequence of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    lines: Vec<PlaylistLine>,
}

impl Manifest {
    /// Split manifest text on `\n`. A trailing newline yields a final blank
    /// line so that rendering gives back the same text.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(PlaylistLine::parse).collect(),
        }
    }

    pub fn lines(&self) -> &[PlaylistLine] {
        &self.lines
    }

    /// Lines of the given kind, in order
    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = &PlaylistLine> {
        self.lines.iter().filter(move |l| l.kind == kind)
    }

    /// Index of the first variant-selection line
    pub fn first_stream_index(&self) -> Option<usize> {
        self.lines.iter().position(|l| l.kind.is_stream_selection())
    }

    /// New manifest with `block` inserted right before the first
    /// variant-selection line
    pub fn insert_before_streams(&self, block: Vec<PlaylistLine>) -> Result<Self, DomainError> {
        let index = self.first_stream_index().ok_or(DomainError::NoStreamEntries)?;

        let mut lines = Vec::with_capacity(self.lines.len() + block.len());
        lines.extend_from_slice(&self.lines[..index]);
        lines.extend(block);
        lines.extend_from_slice(&self.lines[index..]);
        Ok(Self { lines })
    }

    /// New manifest with every line of `kind` replaced by `rewrite(line)`
    pub fn map_lines<F>(&self, kind: LineKind, mut rewrite: F) -> Result<Self, DomainError>
    where
        F: FnMut(&PlaylistLine) -> Result<PlaylistLine, DomainError>,
    {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                if line.kind == kind {
                    rewrite(line)
                } else {
                    Ok(line.clone())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { lines })
    }

    /// Manifest text, lines joined with `\n`
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(PlaylistLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "#EXTM3U\n#EXT-X-VERSION:7\n\n#EXT-X-STREAM-INF:BANDWIDTH=1,RESOLUTION=960x540\navc-540p/index.m3u8\n";

    #[test]
    fn test_line_kinds() {
        let manifest = Manifest::parse(BASE);
        let kinds: Vec<LineKind> = manifest.lines().iter().map(|l| l.kind()).collect();

        assert_eq!(
            kinds,
            vec![
                LineKind::Tag,
                LineKind::Tag,
                LineKind::Blank,
                LineKind::StreamInf,
                LineKind::Uri,
                LineKind::Blank,
            ]
        );
        assert_eq!(
            PlaylistLine::parse("#EXT-X-I-FRAME-STREAM-INF:URI=\"x\"").kind(),
            LineKind::IFrameStreamInf
        );
        assert_eq!(PlaylistLine::parse("#EXT-X-MEDIA:TYPE=AUDIO").kind(), LineKind::Media);
    }

    #[test]
    fn test_render_round_trips_text() {
        assert_eq!(Manifest::parse(BASE).render(), BASE);
    }

    #[test]
    fn test_insert_before_first_stream() {
        let manifest = Manifest::parse(BASE);
        let inserted = manifest
            .insert_before_streams(vec![
                PlaylistLine::parse("#EXT-X-MEDIA:A"),
                PlaylistLine::parse("#EXT-X-MEDIA:B"),
            ])
            .unwrap();

        assert_eq!(inserted.lines()[3].text(), "#EXT-X-MEDIA:A");
        assert_eq!(inserted.lines()[4].text(), "#EXT-X-MEDIA:B");
        assert_eq!(inserted.lines()[5].kind(), LineKind::StreamInf);
        // Source untouched
        assert_eq!(manifest.lines().len(), 6);
    }

    #[test]
    fn test_iframe_line_counts_as_first_stream() {
        let manifest = Manifest::parse("#EXTM3U\n#EXT-X-I-FRAME-STREAM-INF:URI=\"a\"\n#EXT-X-STREAM-INF:RESOLUTION=1x1\na");
        assert_eq!(manifest.first_stream_index(), Some(1));
    }

    #[test]
    fn test_insert_without_streams_fails() {
        let manifest = Manifest::parse("#EXTM3U\n");
        let err = manifest.insert_before_streams(vec![]).unwrap_err();
        assert_eq!(err, DomainError::NoStreamEntries);
    }

    #[test]
    fn test_map_lines_only_touches_kind() {
        let manifest = Manifest::parse(BASE);
        let mapped = manifest
            .map_lines(LineKind::Uri, |l| Ok(PlaylistLine::parse(&format!("x/{}", l.text()))))
            .unwrap();

        assert_eq!(mapped.lines()[4].text(), "x/avc-540p/index.m3u8");
        assert_eq!(mapped.lines()[3], manifest.lines()[3]);
    }
}
