pub mod reader;
pub mod runner;

pub use crate::domain::model::{KataOutcome, Scalar};
pub use crate::domain::ports::Kata;
pub use crate::utils::error::Result;
