//! Reader for `afinfo -x` XML reports

use crate::domain::errors::DomainError;

/// Format of the first audio track in a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub sample_rate: u32,
    pub channels: Option<u32>,
}

fn child<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn number(node: roxmltree::Node, name: &str) -> Option<u32> {
    let text = child(node, name)?.text()?.trim();
    // sample rates are sometimes printed as floats
    text.parse::<u32>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().map(|v| v.round() as u32))
}

/// Read `audio_info/audio_file/tracks/track` from an afinfo report
pub fn parse_audio_info(xml: &str) -> Result<AudioFormat, DomainError> {
    let malformed = |what: &str| DomainError::ProbeOutput {
        tool: "afinfo".to_string(),
        detail: what.to_string(),
    };

    let doc = roxmltree::Document::parse(xml).map_err(|e| malformed(&e.to_string()))?;
    let root = doc.root_element();
    if root.tag_name().name() != "audio_info" {
        return Err(malformed("missing <audio_info>"));
    }

    let track = child(root, "audio_file")
        .and_then(|f| child(f, "tracks"))
        .and_then(|t| child(t, "track"))
        .ok_or_else(|| malformed("missing audio_file/tracks/track"))?;

    let sample_rate = number(track, "sample_rate").ok_or_else(|| malformed("missing sample_rate"))?;

    Ok(AudioFormat {
        sample_rate,
        channels: number(track, "num_channels"),
    })
}
