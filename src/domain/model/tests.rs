// Unit tests for domain models

use super::*;

#[test]
fn test_score_orders_codec_before_resolution() {
    let avc_2160 = Score::new(1, 5);
    let hevc_540 = Score::new(2, 1);
    let hevc_1080 = Score::new(2, 3);

    assert!(hevc_540 > avc_2160);
    assert!(hevc_1080 > hevc_540);
    assert_eq!(Score::new(2, 3), hevc_1080);
}

#[test]
fn test_score_decimal_encoding() {
    assert_eq!(Score::new(2, 5).to_string(), "2.5");
    assert_eq!(Score::new(1, 3).to_string(), "1.3");
}

#[test]
fn test_variant_descriptor_paths() {
    let variant = VariantDescriptor::new("hevc-1080p", "index.m3u8", Some(Score::new(2, 3)), true);

    assert_eq!(variant.playlist_url, "hevc-1080p/index.m3u8");
    assert_eq!(variant.sidecar_path, "hevc-1080p/hevc-1080p.plist");
    assert_eq!(
        variant.iframe_url.as_deref(),
        Some("hevc-1080p/iframe_index.m3u8")
    );

    let audio = VariantDescriptor::new("aac-lc-128", "index.m3u8", None, false);
    assert!(audio.iframe_url.is_none());
}

#[test]
fn test_subtitle_output_dir() {
    assert_eq!(SubtitleTrack::output_dir_for("subs-", "en", None), "subs-en");
    assert_eq!(
        SubtitleTrack::output_dir_for("subs-", "pt", Some("br")),
        "subs-pt-br"
    );
}

#[test]
fn test_cue_time_format_and_offset() {
    let time = CueTime {
        hours: 1,
        minutes: 2,
        seconds: 3,
        millis: 45,
    };

    assert_eq!(time.to_string(), "01:02:03.045");
    assert_eq!(time.offset_ms(), 3_723_045);
}

#[test]
fn test_tool_invocation_display() {
    let invocation = ToolInvocation::new("mediasubtitlesegmenter")
        .args(["-t", "60"])
        .arg("../en.vtt")
        .current_dir("/tmp/out");

    assert_eq!(
        invocation.to_string(),
        "mediasubtitlesegmenter -t 60 ../en.vtt"
    );
    assert_eq!(invocation.cwd, Some(PathBuf::from("/tmp/out")));
}

#[test]
fn test_track_asset_names() {
    let asset = TrackAsset::new("hevc-2160p.mov", AssetKind::Video);
    assert_eq!(asset.file_name(), "hevc-2160p.mov");
    assert_eq!(asset.stem(), "hevc-2160p");
}
