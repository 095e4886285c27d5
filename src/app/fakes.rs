// Test doubles for the command port and the log output

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Records every invocation and imitates the side effects the
/// interactors depend on (base playlist, whisper output)
#[derive(Default)]
pub struct RecordingCommandPort {
    pub invocations: Mutex<Vec<ToolInvocation>>,
    /// Written to `<cwd>/<-o value>` when the playlist creator runs
    pub base_playlist: String,
    /// Captured stdout per program name
    pub captures: HashMap<String, Vec<String>>,
    pub fail_program: Option<String>,
}

impl RecordingCommandPort {
    pub fn with_base_playlist(base_playlist: &str) -> Self {
        Self {
            base_playlist: base_playlist.to_string(),
            ..Default::default()
        }
    }

    pub fn recorded(&self) -> Vec<ToolInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.recorded().into_iter().map(|i| i.program).collect()
    }

    fn record(&self, invocation: &ToolInvocation) -> Result<(), DomainError> {
        self.invocations.lock().unwrap().push(invocation.clone());
        if self.fail_program.as_deref() == Some(invocation.program.as_str()) {
            return Err(DomainError::ToolFailed {
                command: invocation.to_string(),
                code: "1".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CommandPort for RecordingCommandPort {
    async fn run(&self, invocation: &ToolInvocation) -> Result<(), DomainError> {
        self.record(invocation)?;

        let cwd = invocation.cwd.clone().unwrap_or_else(|| PathBuf::from("."));
        match invocation.program.as_str() {
            "variantplaylistcreator" => {
                std::fs::write(cwd.join(&invocation.args[1]), &self.base_playlist)?;
            }
            program if program.ends_with("main") => {
                for wav in invocation.args.iter().filter(|a| a.ends_with(".wav")) {
                    std::fs::write(format!("{}.vtt", wav), "WEBVTT\n")?;
                }
            }
            "afconvert" => {
                if let Some(target) = invocation.args.last() {
                    std::fs::write(target, b"RIFF")?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn capture(&self, invocation: &ToolInvocation) -> Result<String, DomainError> {
        self.record(invocation)?;

        let recorded = self
            .invocations
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.program == invocation.program)
            .count();
        Ok(self
            .captures
            .get(&invocation.program)
            .and_then(|outputs| outputs.get(recorded - 1).or(outputs.last()))
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory log sink for asserting on emitted warnings
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Plain-text fmt subscriber writing into this capture
    pub fn dispatch(&self) -> tracing::Dispatch {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::Dispatch::new(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
