use assert_cmd::Command;
use predicates::prelude::*;

fn cmd(bin: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.env_remove("RUST_LOG").env_remove("HLSPREP_CONFIG");
    cmd
}

#[test]
fn test_missing_arguments_exit_with_one() {
    for bin in ["hls-prep", "itt-to-webvtt", "whisper-vtt"] {
        cmd(bin)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }
}

#[test]
fn test_help_exits_with_zero() {
    cmd("hls-prep")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT_DIR"));
}

#[test]
fn test_zero_fps_rejected() {
    cmd("itt-to-webvtt")
        .args(["subtitles.itt", "--fps", "0"])
        .assert()
        .code(1);
}

#[test]
fn test_itt_to_webvtt_writes_sibling_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clip.itt");
    std::fs::write(
        &input,
        r#"<tt xmlns="http://www.w3.org/ns/ttml"><body><div><p begin="00:00:01:15" end="00:00:03:00">Hi</p></div></body></tt>"#,
    )
    .unwrap();

    cmd("itt-to-webvtt")
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("clip.vtt"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("clip.vtt")).unwrap(),
        "WEBVTT\n\n00:00:01.500 --> 00:00:03.000 line:95%\nHi"
    );
}

#[test]
fn test_malformed_itt_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clip.itt");
    std::fs::write(&input, r#"<tt><body/></tt>"#).unwrap();

    cmd("itt-to-webvtt")
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed timed text"));
}

#[test]
fn test_hls_prep_unknown_codec_fails_before_tools() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("foo-1080p.mov"), b"").unwrap();
    std::fs::write(dir.path().join("poster.jpeg"), b"").unwrap();

    cmd("hls-prep")
        .current_dir(dir.path())
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown codec: foo"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[scoring.codec_ranks]\navc = 0\n").unwrap();

    cmd("itt-to-webvtt")
        .current_dir(dir.path())
        .args(["--config"])
        .arg(&config)
        .arg("clip.itt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("configuration"));
}
