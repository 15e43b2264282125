pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::repl::{Command, Repl};
pub use app::sentence_pipeline::SentencePipeline;
pub use config::{cli::LocalStorage, CliConfig, RegistrySettings};
pub use crate::core::registry::Registry;
pub use domain::model::{SentenceList, TrainRecord};
pub use utils::error::{AppError, Result};
