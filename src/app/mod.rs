pub mod katas;

use crate::config::KataKind;
use crate::core::runner::KataRunner;
use crate::domain::model::KataOutcome;
use crate::utils::error::Result;
use katas::{CircleArea, FizzBuzz, Gcd};
use std::process::ExitCode;

/// Runs one kata on stdin/stdout.
pub fn launch(kind: KataKind) -> Result<KataOutcome> {
    match kind {
        KataKind::Circle => KataRunner::new(CircleArea).run_stdio(),
        KataKind::Fizzbuzz => KataRunner::new(FizzBuzz).run_stdio(),
        KataKind::Gcd => KataRunner::new(Gcd).run_stdio(),
    }
}

pub fn exit_code(outcome: KataOutcome) -> ExitCode {
    match outcome {
        KataOutcome::Completed => ExitCode::SUCCESS,
        KataOutcome::InputExhausted => ExitCode::FAILURE,
    }
}

/// Turns a launch result into the process exit status, reporting failures
/// on stderr.
pub fn finish(kind: KataKind, result: Result<KataOutcome>) -> ExitCode {
    match result {
        Ok(outcome) => exit_code(outcome),
        Err(e) => {
            tracing::error!("{} kata failed: {}", kind, e);
            eprintln!("Error: {}", e.user_friendly_message());
            ExitCode::FAILURE
        }
    }
}
