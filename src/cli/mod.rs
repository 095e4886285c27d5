//! CLI module for the hlsprep binaries
//!
//! This module handles command-line argument parsing and command execution.

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::{ConvertArgs, GlobalArgs, PackageArgs, TranscribeArgs};

/// Package segmented media, subtitles and metadata into an HLS bundle
#[derive(Parser, Debug)]
#[command(name = "hls-prep")]
#[command(about = "Prepare an HLS bundle from a directory of media files")]
#[command(version)]
pub struct HlsPrepCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub args: PackageArgs,
}

/// Convert iTunes Timed Text to WebVTT
#[derive(Parser, Debug)]
#[command(name = "itt-to-webvtt")]
#[command(about = "Convert an iTunes Timed Text file to WebVTT")]
#[command(version)]
pub struct IttToWebvttCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub args: ConvertArgs,
}

/// Transcribe audio to WebVTT with whisper.cpp
#[derive(Parser, Debug)]
#[command(name = "whisper-vtt")]
#[command(about = "Transcribe audio files to WebVTT subtitles with whisper.cpp")]
#[command(version)]
pub struct WhisperCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub args: TranscribeArgs,
}

/// Parse the process arguments. Usage errors exit with status 1;
/// `--help` and `--version` exit with status 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_definitions_are_consistent() {
        HlsPrepCli::command().debug_assert();
        IttToWebvttCli::command().debug_assert();
        WhisperCli::command().debug_assert();
    }

    #[test]
    fn test_fps_defaults_and_bounds() {
        let cli = IttToWebvttCli::try_parse_from(["itt-to-webvtt", "a.itt"]).unwrap();
        assert_eq!(cli.args.fps, 30);

        let cli = IttToWebvttCli::try_parse_from(["itt-to-webvtt", "a.itt", "--fps", "24"]).unwrap();
        assert_eq!(cli.args.fps, 24);

        assert!(IttToWebvttCli::try_parse_from(["itt-to-webvtt", "a.itt", "--fps", "0"]).is_err());
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(HlsPrepCli::try_parse_from(["hls-prep"]).is_err());
        assert!(WhisperCli::try_parse_from(["whisper-vtt"]).is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = WhisperCli::try_parse_from([
            "whisper-vtt",
            "--json-logs",
            "--config",
            "alt.toml",
            "a.m4a",
            "b.wav",
        ])
        .unwrap();
        assert!(cli.global.json_logs);
        assert_eq!(cli.global.config.as_deref(), Some(std::path::Path::new("alt.toml")));
        assert_eq!(cli.args.inputs.len(), 2);
    }
}
