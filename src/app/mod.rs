// Application layer - Use case interactors

pub mod container;
pub mod convert_interactor;
pub mod package_interactor;
pub mod task_runner;
pub mod transcribe_interactor;

#[cfg(test)]
pub(crate) mod fakes;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use convert_interactor::ConvertInteractor;
pub use package_interactor::PackageInteractor;
pub use task_runner::{Task, TaskRunner};
pub use transcribe_interactor::TranscribeInteractor;
