//! Process execution adapter
//!
//! Runs external tools (segmenters, probes, converters, whisper.cpp) one at
//! a time and maps unsuccessful exits to domain errors.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Local process runner
#[derive(Debug, Default, Clone)]
pub struct ProcessCommandAdapter;

impl ProcessCommandAdapter {
    /// Create new process adapter
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &ToolInvocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }
        command
    }

    fn check_status(
        invocation: &ToolInvocation,
        status: std::process::ExitStatus,
    ) -> Result<(), DomainError> {
        if status.success() {
            return Ok(());
        }
        Err(DomainError::ToolFailed {
            command: invocation.to_string(),
            code: status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string()),
        })
    }

    fn spawn_error(invocation: &ToolInvocation, err: std::io::Error) -> DomainError {
        DomainError::ToolFailed {
            command: invocation.to_string(),
            code: format!("spawn failure ({})", err),
        }
    }
}

#[async_trait]
impl CommandPort for ProcessCommandAdapter {
    async fn run(&self, invocation: &ToolInvocation) -> Result<(), DomainError> {
        info!("Running: {}", invocation);

        let status = Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Self::spawn_error(invocation, e))?;

        Self::check_status(invocation, status)
    }

    async fn capture(&self, invocation: &ToolInvocation) -> Result<String, DomainError> {
        info!("Running: {}", invocation);

        let output = Self::command(invocation)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| Self::spawn_error(invocation, e))?;

        Self::check_status(invocation, output.status)?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
