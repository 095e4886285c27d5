// Adapters - External system implementations

pub mod exec_process;
pub mod fs_local;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_process::ProcessCommandAdapter;
pub use fs_local::LocalFsAdapter;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::{LogFormat, TracingLogAdapter};
