pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;

pub use config::{load_config, load_optional_config};
pub use run::{run_app, RunOptions};
pub use runtime::{create_runtime, ViewerRuntime};
