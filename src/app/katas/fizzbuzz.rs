use crate::core::reader::{Prompt, ScalarReader};
use crate::domain::model::KataOutcome;
use crate::domain::ports::Kata;
use crate::utils::error::Result;
use crate::utils::validation::accept_any;
use std::borrow::Cow;
use std::io::{BufRead, Write};

pub const HEADER: &str = "Enter integers:";
pub const MALFORMED_MESSAGE: &str = "please enter a valid integer";

pub fn fizzbuzz(n: i64) -> Cow<'static, str> {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => Cow::Borrowed("FizzBuzz"),
        (true, false) => Cow::Borrowed("Fizz"),
        (false, true) => Cow::Borrowed("Buzz"),
        (false, false) => Cow::Owned(n.to_string()),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FizzBuzz;

impl Kata for FizzBuzz {
    fn name(&self) -> &'static str {
        "fizzbuzz"
    }

    /// Answers every integer until the input ends; end of input is the
    /// normal way out.
    fn run<R: BufRead, W: Write>(&self, reader: &mut ScalarReader<R, W>) -> Result<KataOutcome> {
        reader.write_line(HEADER)?;

        let prompt = Prompt::silent().with_malformed_message(MALFORMED_MESSAGE);
        let mut answered = 0usize;
        while let Some(n) = reader.read_with::<i64, _>(prompt, accept_any)? {
            reader.write_line(&fizzbuzz(n))?;
            answered += 1;
        }

        tracing::debug!(answered, "End of input");
        Ok(KataOutcome::Completed)
    }
}
