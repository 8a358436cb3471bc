use crate::core::reader::{Prompt, ScalarReader};
use crate::domain::model::KataOutcome;
use crate::domain::ports::Kata;
use crate::utils::error::Result;
use crate::utils::validation::non_negative;
use std::f64::consts::PI;
use std::io::{BufRead, Write};

pub const RADIUS_PROMPT: &str = "Enter the circle radius: ";

pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

pub fn format_area(area: f64) -> String {
    format!("The area of the circle is: {:.6}", area)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CircleArea;

impl Kata for CircleArea {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn run<R: BufRead, W: Write>(&self, reader: &mut ScalarReader<R, W>) -> Result<KataOutcome> {
        let Some(radius) = reader.read_with::<f64, _>(Prompt::new(RADIUS_PROMPT), non_negative)?
        else {
            return Ok(KataOutcome::InputExhausted);
        };

        let area = circle_area(radius);
        tracing::debug!(radius, area, "Computed circle area");
        reader.write_line(&format_area(area))?;
        Ok(KataOutcome::Completed)
    }
}
