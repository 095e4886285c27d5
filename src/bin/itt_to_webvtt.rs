//! itt-to-webvtt
//!
//! ```bash
//! itt-to-webvtt subtitles.itt --fps 24
//! ```

use anyhow::Result;
use hlsprep::cli::{self, IttToWebvttCli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli: IttToWebvttCli = cli::parse_or_exit();
    cli::commands::convert(cli).await
}
