// Transcribe interactor - Speech to WebVTT use case driving whisper.cpp

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::config::{ToolConfig, TranscriptionConfig};
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

pub mod afinfo;

pub use afinfo::{parse_audio_info, AudioFormat};

/// An input prepared for the speech engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedAudio {
    pub source: PathBuf,
    pub wav: PathBuf,
    /// `wav` was produced by conversion and is deleted afterwards
    pub temporary: bool,
}

impl PreparedAudio {
    /// Where whisper.cpp writes its cues: `<wav>.vtt`
    pub fn engine_output(&self) -> PathBuf {
        let mut name = OsString::from(self.wav.as_os_str());
        name.push(".vtt");
        PathBuf::from(name)
    }

    /// Final subtitle location, next to the source
    pub fn subtitle_path(&self) -> PathBuf {
        self.source.with_extension("vtt")
    }
}

/// Interactor for audio transcription
pub struct TranscribeInteractor {
    command_port: Arc<dyn CommandPort>,
    fs_port: Arc<dyn FsPort>,
    tools: ToolConfig,
    config: TranscriptionConfig,
}

impl TranscribeInteractor {
    pub fn new(
        command_port: Arc<dyn CommandPort>,
        fs_port: Arc<dyn FsPort>,
        tools: ToolConfig,
        config: TranscriptionConfig,
    ) -> Self {
        Self {
            command_port,
            fs_port,
            tools,
            config,
        }
    }

    /// Transcribe every input; returns the subtitle files written
    pub async fn execute(&self, request: TranscribeRequest) -> Result<Vec<PathBuf>, DomainError> {
        if request.inputs.is_empty() {
            return Err(DomainError::BadArgs("no audio files given".to_string()));
        }

        let mut prepared = Vec::with_capacity(request.inputs.len());
        for input in &request.inputs {
            prepared.push(self.prepare(input).await?);
        }

        let invocation = ToolInvocation::new(&self.config.whisper_binary)
            .args(["-ovtt", "-m"])
            .arg(&self.config.model)
            .args(prepared.iter().map(|p| p.wav.to_string_lossy().to_string()));
        self.command_port.run(&invocation).await?;

        let mut outputs = Vec::with_capacity(prepared.len());
        for audio in &prepared {
            let subtitle = audio.subtitle_path();
            self.fs_port.rename(&audio.engine_output(), &subtitle).await?;
            info!("Wrote {}", subtitle.display());
            outputs.push(subtitle);
        }

        for audio in prepared.iter().filter(|p| p.temporary) {
            debug!("Removing {}", audio.wav.display());
            self.fs_port.remove_file(&audio.wav).await?;
        }

        Ok(outputs)
    }

    /// Probe one input and convert it unless it already matches the engine format
    pub async fn prepare(&self, input: &Path) -> Result<PreparedAudio, DomainError> {
        if !self.fs_port.exists(input).await? {
            return Err(DomainError::FsFail(format!(
                "Input file does not exist: {}",
                input.display()
            )));
        }

        info!("Evaluating {}", input.display());
        if !self.needs_conversion(input).await? {
            return Ok(PreparedAudio {
                source: input.to_path_buf(),
                wav: input.to_path_buf(),
                temporary: false,
            });
        }

        let wav = self.converted_path(input);
        info!(
            "Converting {} to {} Hz WAV",
            input.display(),
            self.config.sample_rate
        );
        let invocation = ToolInvocation::new(&self.tools.audio_converter)
            .args(["-f", "WAVE", "-d"])
            .arg(format!("LEI16@{}", self.config.sample_rate))
            .arg("-c")
            .arg(self.config.channels.to_string())
            .arg(input.to_string_lossy())
            .arg(wav.to_string_lossy());
        self.command_port.run(&invocation).await?;

        Ok(PreparedAudio {
            source: input.to_path_buf(),
            wav,
            temporary: true,
        })
    }

    async fn needs_conversion(&self, input: &Path) -> Result<bool, DomainError> {
        let file_type = self
            .command_port
            .capture(&ToolInvocation::new(&self.tools.file_probe).arg(input.to_string_lossy()))
            .await?;
        if !file_type.contains("WAV") {
            return Ok(true);
        }

        let report = self
            .command_port
            .capture(
                &ToolInvocation::new(&self.tools.audio_probe)
                    .arg("-x")
                    .arg(input.to_string_lossy()),
            )
            .await?;
        let format = parse_audio_info(&report)?;
        debug!("{} is {:?}", input.display(), format);

        Ok(format.sample_rate != self.config.sample_rate
            || format.channels.is_some_and(|c| c != self.config.channels))
    }

    /// `<dir>/<stem>.16k.wav` for a 16 kHz target
    fn converted_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        input.with_file_name(format!("{}.{}k.wav", stem, self.config.sample_rate / 1000))
    }
}
