//! whisper-vtt
//!
//! Transcribes audio files with a local whisper.cpp build:
//!
//! ```bash
//! whisper-vtt interview.m4a memo.wav
//! ```

use anyhow::Result;
use hlsprep::cli::{self, WhisperCli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli: WhisperCli = cli::parse_or_exit();
    cli::commands::transcribe(cli).await
}
