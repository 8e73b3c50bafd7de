pub mod arguments;
pub mod error;
pub mod job;
pub mod loader;
pub mod run_options;
pub mod scheduler;

pub use arguments::{ArgumentValue, ArgumentsMap};
pub use error::ConfigError;
pub use job::{JobConfig, JobFile, RunSection, DEFAULT_TEMP_FILE};
pub use loader::{JobFileLoader, JobFileLoaderFile};
pub use run_options::{LaunchMode, RunOptions};
pub use scheduler::{SchedulerConfig, SchedulerOptions};
