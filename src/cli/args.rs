//! Command-line argument definitions

use clap::Args;
use std::path::PathBuf;

use crate::timed_text::DEFAULT_FPS;

/// Options shared by every binary
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, env = "HLSPREP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Configuration file (default: $HLSPREP_CONFIG, then ./hlsprep.toml).
    /// Relative whisper.cpp paths in it resolve against the executable's directory
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for hls-prep
#[derive(Args, Debug, Clone)]
pub struct PackageArgs {
    /// Directory holding the .mov, .m4a and .vtt files, meta- directories and poster.jpeg
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,
}

/// Arguments for itt-to-webvtt
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// iTunes Timed Text file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Frame rate of the timecodes
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,
}

/// Arguments for whisper-vtt
#[derive(Args, Debug, Clone)]
pub struct TranscribeArgs {
    /// Audio files to transcribe
    #[arg(value_name = "AUDIO", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}
