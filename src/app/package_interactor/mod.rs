// Package interactor - Orchestrates the bundle build use case

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::app::task_runner::{Task, TaskRunner};
use crate::assets::{AssetClassifier, ClassifiedAssets};
use crate::domain::config::PipelineConfig;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::{order_variants, VariantScorer};
use crate::language::LanguageResolver;
use crate::playlist::{Manifest, PlaylistAssembler};
use crate::ports::*;


/// Interactor for building an HLS bundle out of an input directory
pub struct PackageInteractor {
    command_port: Arc<dyn CommandPort>,
    fs_port: Arc<dyn FsPort>,
    config: Arc<PipelineConfig>,
    resolver: Arc<LanguageResolver>,
}

/// Scored media files, ready to be segmented
#[derive(Debug, Clone)]
pub struct ScoredAssets {
    pub videos: Vec<(TrackAsset, VariantDescriptor)>,
    pub audios: Vec<(TrackAsset, VariantDescriptor)>,
}

impl PackageInteractor {
    /// Create new package interactor with injected ports
    pub fn new(
        command_port: Arc<dyn CommandPort>,
        fs_port: Arc<dyn FsPort>,
        config: Arc<PipelineConfig>,
        resolver: Arc<LanguageResolver>,
    ) -> Self {
        Self {
            command_port,
            fs_port,
            config,
            resolver,
        }
    }

    /// Build the bundle
    pub async fn execute(&self, request: PackageRequest) -> Result<PackageReport, DomainError> {
        let input_dir = request.input_dir;
        info!("Preparing HLS bundle from: {}", input_dir.display());

        if !self.fs_port.exists(&input_dir).await? {
            return Err(DomainError::FsFail(format!(
                "Input directory does not exist: {}",
                input_dir.display()
            )));
        }

        let entries = self.fs_port.list_dir(&input_dir).await?;
        let classifier = AssetClassifier::new(&self.config.inputs, &self.resolver)?;
        let assets = classifier.classify(&entries)?;

        let mut metadata_dirs = Vec::new();
        let mut metadata_tracks = Vec::new();
        for dir in &assets.metadata_dirs {
            let manifest = classifier.metadata_manifest_path(&input_dir, dir);
            if self.fs_port.exists(&manifest).await? {
                metadata_tracks.push(classifier.metadata_track(dir));
                metadata_dirs.push(dir.clone());
            } else {
                warn!(
                    "Skipping metadata directory {}: {} not found",
                    dir.file_name(),
                    manifest.display()
                );
            }
        }

        // Scoring failures must surface before the first tool runs
        let scored = self.score_assets(&assets)?;

        let output_dir = input_dir.join(Uuid::now_v7().simple().to_string());
        info!("Writing bundle to: {}", output_dir.display());

        let tasks = self.plan(&input_dir, &output_dir, &scored, &assets.subtitles, &metadata_dirs);
        TaskRunner::new(Arc::clone(&self.command_port), Arc::clone(&self.fs_port))
            .run_all(&tasks)
            .await?;

        self.write_manifest(&output_dir, &assets.subtitles, &metadata_tracks)
            .await?;

        let poster = &self.config.inputs.poster_name;
        self.fs_port
            .copy_file(&input_dir.join(poster), &output_dir.join(poster))
            .await?;

        info!("HLS bundle ready: {}", output_dir.display());

        Ok(PackageReport {
            output_dir,
            variants: order_variants(&variant_list(&scored)),
            subtitle_tracks: assets.subtitles,
            metadata_tracks,
        })
    }

    /// Score every video and audio file
    pub fn score_assets(&self, assets: &ClassifiedAssets) -> Result<ScoredAssets, DomainError> {
        let scorer = VariantScorer::new(&self.config.scoring);
        let playlist_name = &self.config.inputs.playlist_name;

        let describe = |asset: &TrackAsset, with_iframes: bool| {
            let id = asset.stem();
            let score = scorer.score(&id)?;
            Ok::<_, DomainError>((
                asset.clone(),
                VariantDescriptor::new(&id, playlist_name, score, with_iframes),
            ))
        };

        Ok(ScoredAssets {
            videos: assets
                .videos
                .iter()
                .map(|a| describe(a, true))
                .collect::<Result<_, _>>()?,
            audios: assets
                .audios
                .iter()
                .map(|a| describe(a, false))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Ordered task list: videos, audios, subtitles, metadata copies, base playlist
    pub fn plan(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        scored: &ScoredAssets,
        subtitles: &[SubtitleTrack],
        metadata_dirs: &[TrackAsset],
    ) -> Vec<Task> {
        let mut tasks = vec![Task::CreateDir(output_dir.to_path_buf())];

        for (asset, variant) in scored.videos.iter().chain(&scored.audios) {
            tasks.push(Task::CreateDir(output_dir.join(&variant.id)));
            tasks.push(Task::Run(self.segment_media(output_dir, asset, variant)));
        }

        for track in subtitles {
            tasks.push(Task::CreateDir(output_dir.join(&track.output_dir)));
            tasks.push(Task::Run(self.segment_subtitles(output_dir, track)));
        }

        for dir in metadata_dirs {
            tasks.push(Task::CopyDir {
                from: input_dir.join(&dir.path),
                to: output_dir.join(&dir.path),
            });
        }

        tasks.push(Task::Run(
            self.create_base_playlist(output_dir, &variant_list(scored)),
        ));
        tasks
    }

    fn segment_media(
        &self,
        output_dir: &Path,
        asset: &TrackAsset,
        variant: &VariantDescriptor,
    ) -> ToolInvocation {
        let mut invocation = ToolInvocation::new(&self.config.tools.media_segmenter)
            .args(["-r", "-s", "-t"])
            .arg(self.config.segmenting.media_segment_seconds.to_string())
            .arg("-start-segments-with-iframe");
        if let Some(score) = variant.score {
            invocation = invocation.arg("-score").arg(score.to_string());
        }
        invocation
            .arg("-i")
            .arg(&self.config.inputs.playlist_name)
            .arg("-f")
            .arg(&variant.id)
            .arg("-variant-plist")
            .arg(&variant.id)
            .arg(format!("../{}", asset.file_name()))
            .current_dir(output_dir)
    }

    fn segment_subtitles(&self, output_dir: &Path, track: &SubtitleTrack) -> ToolInvocation {
        ToolInvocation::new(&self.config.tools.subtitle_segmenter)
            .arg("-t")
            .arg(self.config.segmenting.subtitle_segment_seconds.to_string())
            .arg("-f")
            .arg(&track.output_dir)
            .arg("-i")
            .arg(&self.config.inputs.playlist_name)
            .arg(format!("../{}", track.filename))
            .current_dir(output_dir)
    }

    fn create_base_playlist(
        &self,
        output_dir: &Path,
        variants: &[VariantDescriptor],
    ) -> ToolInvocation {
        let mut invocation = ToolInvocation::new(&self.config.tools.playlist_creator)
            .arg("-o")
            .arg(&self.config.inputs.playlist_name);
        for variant in order_variants(variants) {
            invocation = invocation.arg(variant.playlist_url).arg(variant.sidecar_path);
            if let Some(iframe) = variant.iframe_url {
                invocation = invocation.arg("-iframe-url").arg(iframe);
            }
        }
        invocation.current_dir(output_dir)
    }

    async fn write_manifest(
        &self,
        output_dir: &Path,
        subtitles: &[SubtitleTrack],
        metadata_tracks: &[MetadataTrack],
    ) -> Result<PathBuf, DomainError> {
        let path = output_dir.join(&self.config.inputs.playlist_name);
        let base = Manifest::parse(&self.fs_port.read_to_string(&path).await?);

        let manifest = PlaylistAssembler::from_config(&self.config).assemble(
            &base,
            subtitles,
            metadata_tracks,
        )?;

        self.fs_port.write(&path, &manifest.render()).await?;
        info!("Wrote multivariant playlist: {}", path.display());
        Ok(path)
    }
}

/// Variants handed to the base-playlist creator. Audio files are segmented
/// but only reach the manifest through the audio rendition groups.
fn variant_list(scored: &ScoredAssets) -> Vec<VariantDescriptor> {
    scored.videos.iter().map(|(_, v)| v.clone()).collect()
}
