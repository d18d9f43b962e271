pub mod config;
pub mod cli;
pub mod pipeline;

pub use config::Config;
pub use cli::Args;
pub use pipeline::{run, RunReport};
