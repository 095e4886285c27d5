//! iTunes Timed Text (TTML) reader

use crate::domain::errors::DomainError;
use crate::domain::model::{Cue, CuePosition, CueTime};

/// Convert an `HH:MM:SS:FF` timecode to a WebVTT timestamp.
///
/// The frame count becomes `round(frames / fps * 1000)` milliseconds; the
/// other fields are copied as they are. A frame count of `fps` or more is
/// not a valid frame of that second.
pub fn parse_timecode(timecode: &str, fps: u32) -> Result<CueTime, DomainError> {
    let invalid = || DomainError::InvalidTimecode(timecode.to_string());

    if fps == 0 {
        return Err(DomainError::BadArgs("frame rate must be positive".to_string()));
    }

    let parts: Vec<&str> = timecode.trim().split(':').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }

    let mut fields = [0u32; 4];
    for (field, part) in fields.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *field = part.parse().map_err(|_| invalid())?;
    }
    let [hours, minutes, seconds, frames] = fields;
    if frames >= fps {
        return Err(invalid());
    }

    let millis = (frames as f64 / fps as f64 * 1000.0).round() as u32;

    Ok(CueTime {
        hours,
        minutes,
        seconds,
        millis,
    })
}

fn child_element<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn attribute<'a>(node: &roxmltree::Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == name)
        .map(|a| a.value())
}

/// Escape the characters WebVTT cue text treats as markup
fn push_escaped(text: &mut String, raw: &str) {
    for c in raw.chars() {
        match c {
            '&' => text.push_str("&amp;"),
            '<' => text.push_str("&lt;"),
            '>' => text.push_str("&gt;"),
            _ => text.push(c),
        }
    }
}

/// Text of a paragraph; nested spans contribute their text, `<br/>` a newline
fn paragraph_text(node: roxmltree::Node) -> String {
    let mut text = String::new();
    for child in node.children() {
        if child.is_text() {
            push_escaped(&mut text, child.text().unwrap_or_default());
        } else if child.is_element() {
            if child.tag_name().name() == "br" {
                text.push('\n');
            } else {
                text.push_str(&paragraph_text(child));
            }
        }
    }
    text
}

/// Read the cues of a timed-text document in document order.
///
/// Cues live at `tt/body/div[0]/p`.
pub fn parse_cues(document: &str, fps: u32) -> Result<Vec<Cue>, DomainError> {
    let doc = roxmltree::Document::parse(document)
        .map_err(|e| DomainError::MalformedTimedText(format!("XML parse error: {}", e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "tt" {
        return Err(DomainError::MalformedTimedText(
            "Root element must be <tt>".to_string(),
        ));
    }

    let body = child_element(root, "body")
        .ok_or_else(|| DomainError::MalformedTimedText("Missing <body>".to_string()))?;
    let div = child_element(body, "div")
        .ok_or_else(|| DomainError::MalformedTimedText("Missing <div>".to_string()))?;

    div.children()
        .filter(|n| n.is_element() && n.tag_name().name() == "p")
        .map(|p| {
            let begin = attribute(&p, "begin").ok_or_else(|| {
                DomainError::MalformedTimedText("Cue without begin attribute".to_string())
            })?;
            let end = attribute(&p, "end").ok_or_else(|| {
                DomainError::MalformedTimedText("Cue without end attribute".to_string())
            })?;

            let position = match attribute(&p, "region") {
                Some("top") => CuePosition::Top,
                _ => CuePosition::Bottom,
            };

            Ok(Cue {
                start: parse_timecode(begin, fps)?,
                end: parse_timecode(end, fps)?,
                text: paragraph_text(p).trim().to_string(),
                italic: attribute(&p, "fontStyle") == Some("italic"),
                position,
            })
        })
        .collect()
}
