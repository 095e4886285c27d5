//! hls-prep
//!
//! Packages a directory of segmentable media into an HLS bundle:
//!
//! ```bash
//! hls-prep ./episode-01
//! ```
//!
//! The bundle lands in `./episode-01/<id>/` with a multivariant `index.m3u8`.

use anyhow::Result;
use hlsprep::cli::{self, HlsPrepCli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli: HlsPrepCli = cli::parse_or_exit();
    cli::commands::package(cli).await
}
