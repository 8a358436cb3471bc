use crate::core::reader::ScalarReader;
use crate::domain::model::KataOutcome;
use crate::domain::ports::Kata;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const FIRST_PROMPT: &str = "Enter the first integer: ";
pub const SECOND_PROMPT: &str = "Enter the second integer: ";

/// Euclid's remainder algorithm over magnitudes.
///
/// Always non-negative; `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`. Working on
/// `u64` keeps `i64::MIN` representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Gcd;

impl Kata for Gcd {
    fn name(&self) -> &'static str {
        "gcd"
    }

    fn run<R: BufRead, W: Write>(&self, reader: &mut ScalarReader<R, W>) -> Result<KataOutcome> {
        let Some(x) = reader.read_value::<i64>(FIRST_PROMPT)? else {
            return Ok(KataOutcome::InputExhausted);
        };
        let Some(y) = reader.read_value::<i64>(SECOND_PROMPT)? else {
            return Ok(KataOutcome::InputExhausted);
        };

        let divisor = gcd(x, y);
        tracing::debug!(x, y, divisor, "Computed gcd");
        reader.write_line(&format!("GCD = {}", divisor))?;
        Ok(KataOutcome::Completed)
    }
}
