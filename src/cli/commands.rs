//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::{LogFormat, TomlConfigAdapter, TracingLogAdapter};
use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::{GlobalArgs, HlsPrepCli, IttToWebvttCli, WhisperCli};
use crate::domain::model::{ConvertRequest, PackageRequest, TranscribeRequest};

/// Install logging and load configuration
pub fn bootstrap(global: &GlobalArgs) -> Result<DefaultAppContainer> {
    let format = if global.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    TracingLogAdapter::init(&global.log_level, format)?;

    let config = TomlConfigAdapter::load(global.config.as_deref())
        .context("Failed to load configuration")?;
    Ok(DefaultAppContainer::new(config))
}

/// hls-prep
pub async fn package(cli: HlsPrepCli) -> Result<()> {
    let container = bootstrap(&cli.global)?;

    let report = container
        .package_interactor()
        .execute(PackageRequest {
            input_dir: cli.args.input_dir.clone(),
        })
        .await
        .with_context(|| format!("Failed to prepare {}", cli.args.input_dir.display()))?;

    info!(
        "{} variants, {} subtitle tracks, {} metadata tracks",
        report.variants.len(),
        report.subtitle_tracks.len(),
        report.metadata_tracks.len()
    );
    println!("{}", report.output_dir.display());
    Ok(())
}

/// itt-to-webvtt
pub async fn convert(cli: IttToWebvttCli) -> Result<()> {
    let container = bootstrap(&cli.global)?;

    let output = container
        .convert_interactor()
        .execute(ConvertRequest {
            input: cli.args.input.clone(),
            fps: cli.args.fps,
        })
        .await
        .with_context(|| format!("Failed to convert {}", cli.args.input.display()))?;

    println!("{}", output.display());
    Ok(())
}

/// whisper-vtt
pub async fn transcribe(cli: WhisperCli) -> Result<()> {
    let container = bootstrap(&cli.global)?;

    let outputs = container
        .transcribe_interactor()
        .execute(TranscribeRequest {
            inputs: cli.args.inputs,
        })
        .await
        .context("Transcription failed")?;

    for output in outputs {
        println!("{}", output.display());
    }
    Ok(())
}
