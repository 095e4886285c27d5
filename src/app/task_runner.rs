// Task runner - Executes an ordered tool plan one step at a time

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// One step of a bundle build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    CreateDir(PathBuf),
    Run(ToolInvocation),
    CopyDir { from: PathBuf, to: PathBuf },
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::CreateDir(dir) => write!(f, "mkdir {}", dir.display()),
            Task::Run(invocation) => write!(f, "{}", invocation),
            Task::CopyDir { from, to } => write!(f, "copy {} -> {}", from.display(), to.display()),
        }
    }
}

/// Sequential runner: the first failing task aborts the plan
pub struct TaskRunner {
    command_port: Arc<dyn CommandPort>,
    fs_port: Arc<dyn FsPort>,
}

impl TaskRunner {
    pub fn new(command_port: Arc<dyn CommandPort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            command_port,
            fs_port,
        }
    }

    pub async fn run(&self, task: &Task) -> Result<(), DomainError> {
        match task {
            Task::CreateDir(dir) => self.fs_port.create_dir_all(dir).await,
            Task::Run(invocation) => self.command_port.run(invocation).await,
            Task::CopyDir { from, to } => {
                info!("Copying {} to {}", from.display(), to.display());
                self.fs_port.copy_dir(from, to).await
            }
        }
    }

    pub async fn run_all(&self, tasks: &[Task]) -> Result<(), DomainError> {
        for (index, task) in tasks.iter().enumerate() {
            debug!("Task {}/{}: {}", index + 1, tasks.len(), task);
            self.run(task).await?;
        }
        Ok(())
    }
}
