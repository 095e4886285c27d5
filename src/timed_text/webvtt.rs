//! WebVTT writer

use crate::domain::model::Cue;

pub const WEBVTT_HEADER: &str = "WEBVTT";

/// One cue block: timing line with its line setting, then the text
pub fn render_cue(cue: &Cue) -> String {
    let text = if cue.italic {
        format!("<i>{}</i>", cue.text)
    } else {
        cue.text.clone()
    };

    format!(
        "\n{} --> {} {}\n{}",
        cue.start,
        cue.end,
        cue.position.cue_setting(),
        text
    )
}

/// Full document; cue blocks are separated by a blank line
pub fn render(cues: &[Cue]) -> String {
    let blocks: Vec<String> = cues.iter().map(render_cue).collect();
    format!("{}\n{}", WEBVTT_HEADER, blocks.join("\n"))
}
