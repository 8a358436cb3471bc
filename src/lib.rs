pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{KataKind, LogFormat};
pub use crate::core::{reader::ScalarReader, runner::KataRunner};
pub use domain::model::{KataOutcome, Scalar, ScalarKind};
pub use utils::error::{InputError, KataError, Result};
