use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Integer,
    Real,
}

impl ScalarKind {
    pub fn default_malformed_message(self) -> &'static str {
        match self {
            ScalarKind::Integer => "please enter an integer",
            ScalarKind::Real => "please enter a numeric value",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Integer => write!(f, "integer"),
            ScalarKind::Real => write!(f, "real"),
        }
    }
}

/// A numeric type the reader can ask for.
pub trait Scalar: Copy + fmt::Display + fmt::Debug {
    const KIND: ScalarKind;

    /// Parses one whole token. Partial matches (`3abc`) are rejected.
    fn parse_token(token: &str) -> Option<Self>;
}

impl Scalar for i64 {
    const KIND: ScalarKind = ScalarKind::Integer;

    fn parse_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Real;

    // `inf` and `NaN` parse in Rust but are not numbers an operator can type.
    fn parse_token(token: &str) -> Option<Self> {
        token.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KataOutcome {
    Completed,
    /// Input ended before every value the kata needed was read.
    InputExhausted,
}
