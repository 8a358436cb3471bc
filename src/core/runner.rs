use crate::core::reader::ScalarReader;
use crate::domain::model::KataOutcome;
use crate::domain::ports::Kata;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub struct KataRunner<K: Kata> {
    kata: K,
}

impl<K: Kata> KataRunner<K> {
    pub fn new(kata: K) -> Self {
        Self { kata }
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<KataOutcome> {
        tracing::info!("Starting {} kata", self.kata.name());

        let mut reader = ScalarReader::new(input, output);
        let outcome = self.kata.run(&mut reader)?;

        match outcome {
            KataOutcome::Completed => {
                tracing::info!("{} kata completed", self.kata.name());
            }
            KataOutcome::InputExhausted => {
                tracing::warn!("{} kata stopped: input ended before a valid value", self.kata.name());
            }
        }

        Ok(outcome)
    }

    /// Runs against the process's terminal.
    pub fn run_stdio(&self) -> Result<KataOutcome> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }
}
