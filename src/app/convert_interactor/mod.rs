// Convert interactor - Timed text to WebVTT use case

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use crate::timed_text;

/// Interactor for ITT to WebVTT conversion
pub struct ConvertInteractor {
    fs_port: Arc<dyn FsPort>,
}

impl ConvertInteractor {
    pub fn new(fs_port: Arc<dyn FsPort>) -> Self {
        Self { fs_port }
    }

    /// Convert `request.input` and write the WebVTT file next to it.
    /// Returns the output path.
    pub async fn execute(&self, request: ConvertRequest) -> Result<PathBuf, DomainError> {
        if request.fps == 0 {
            return Err(DomainError::BadArgs("frame rate must be at least 1".to_string()));
        }

        let output = request.input.with_extension("vtt");
        if output == request.input {
            return Err(DomainError::BadArgs(format!(
                "Input is already a WebVTT file: {}",
                request.input.display()
            )));
        }

        info!(
            "Converting {} at {} fps",
            request.input.display(),
            request.fps
        );
        let document = self.fs_port.read_to_string(&request.input).await?;
        let webvtt = timed_text::convert(&document, request.fps)?;

        self.fs_port.write(&output, &webvtt).await?;
        info!("Wrote {}", output.display());
        Ok(output)
    }
}
