pub mod calculator;
pub mod logging;

pub use calculator::{ArithmeticError, CalcResult, Calculator, checked_multiply, multiply};
