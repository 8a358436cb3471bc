use crate::core::reader::ScalarReader;
use crate::domain::model::KataOutcome;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub trait Kata {
    fn name(&self) -> &'static str;

    fn run<R: BufRead, W: Write>(&self, reader: &mut ScalarReader<R, W>) -> Result<KataOutcome>;
}
