#[cfg(feature = "cli")]
use clap::Parser;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum KataKind {
    /// Area of a circle from its radius
    Circle,
    /// FizzBuzz for every integer until end of input
    Fizzbuzz,
    /// Greatest common divisor of two integers
    Gcd,
}

impl fmt::Display for KataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KataKind::Circle => write!(f, "circle"),
            KataKind::Fizzbuzz => write!(f, "fizzbuzz"),
            KataKind::Gcd => write!(f, "gcd"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "console-katas")]
#[command(about = "Small interactive arithmetic katas")]
pub struct CliConfig {
    /// Which kata to run
    #[arg(value_enum)]
    pub kata: KataKind,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
