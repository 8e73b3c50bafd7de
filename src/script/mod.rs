pub mod builder;
pub mod error;
pub mod unique_path;
pub mod writer;

pub use builder::{invocation_line, BuiltScript, InteractiveLaunch, ScriptBuilder};
pub use error::ScriptError;
pub use writer::{FileWriter, LocalFile};
