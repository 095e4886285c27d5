use std::sync::Arc;

use crate::adapters::{LocalFsAdapter, ProcessCommandAdapter};
use crate::app::{
    convert_interactor::ConvertInteractor, package_interactor::PackageInteractor,
    transcribe_interactor::TranscribeInteractor,
};
use crate::domain::config::PipelineConfig;
use crate::language::LanguageResolver;
use crate::ports::{CommandPort, FsPort};

pub trait AppContainer: Send + Sync {
    fn package_interactor(&self) -> Arc<PackageInteractor>;
    fn convert_interactor(&self) -> Arc<ConvertInteractor>;
    fn transcribe_interactor(&self) -> Arc<TranscribeInteractor>;
}

pub struct DefaultAppContainer {
    package_interactor: Arc<PackageInteractor>,
    convert_interactor: Arc<ConvertInteractor>,
    transcribe_interactor: Arc<TranscribeInteractor>,
}

impl DefaultAppContainer {
    /// Wire the interactors to local processes and the local file system
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_ports(
            Arc::new(ProcessCommandAdapter::new()),
            Arc::new(LocalFsAdapter::new()),
            config,
        )
    }

    pub fn with_ports(
        command_port: Arc<dyn CommandPort>,
        fs_port: Arc<dyn FsPort>,
        config: PipelineConfig,
    ) -> Self {
        let config = Arc::new(config);

        let package_interactor = Arc::new(PackageInteractor::new(
            Arc::clone(&command_port),
            Arc::clone(&fs_port),
            Arc::clone(&config),
            Arc::new(LanguageResolver::iso()),
        ));

        let convert_interactor = Arc::new(ConvertInteractor::new(Arc::clone(&fs_port)));

        let transcribe_interactor = Arc::new(TranscribeInteractor::new(
            Arc::clone(&command_port),
            Arc::clone(&fs_port),
            config.tools.clone(),
            config.transcription.clone(),
        ));

        Self {
            package_interactor,
            convert_interactor,
            transcribe_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn package_interactor(&self) -> Arc<PackageInteractor> {
        Arc::clone(&self.package_interactor)
    }

    fn convert_interactor(&self) -> Arc<ConvertInteractor> {
        Arc::clone(&self.convert_interactor)
    }

    fn transcribe_interactor(&self) -> Arc<TranscribeInteractor> {
        Arc::clone(&self.transcribe_interactor)
    }
}
