pub mod circle;
pub mod fizzbuzz;
pub mod gcd;

pub use circle::CircleArea;
pub use fizzbuzz::FizzBuzz;
pub use gcd::Gcd;
