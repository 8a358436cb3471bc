//! Domain constraints for prompted values.
//!
//! A constraint is any `Fn(&T) -> Result<(), String>`; the `Err` string is
//! the message shown to the operator.

use std::fmt::Display;

pub type ConstraintResult = std::result::Result<(), String>;

pub fn accept_any<T>(_value: &T) -> ConstraintResult {
    Ok(())
}

pub fn non_negative<T: PartialOrd + Default>(value: &T) -> ConstraintResult {
    if *value < T::default() {
        return Err("the value cannot be negative".to_string());
    }
    Ok(())
}

pub fn at_least<T: PartialOrd + Display + Copy>(min: T) -> impl Fn(&T) -> ConstraintResult {
    move |value: &T| {
        if *value < min {
            return Err(format!("the value must be at least {}", min));
        }
        Ok(())
    }
}

pub fn in_range<T: PartialOrd + Display + Copy>(min: T, max: T) -> impl Fn(&T) -> ConstraintResult {
    move |value: &T| {
        if *value < min || *value > max {
            return Err(format!("the value must be between {} and {}", min, max));
        }
        Ok(())
    }
}
