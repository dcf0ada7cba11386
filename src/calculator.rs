//! Integer arithmetic with a textual audit trail.
//!
//! `Calculator` records every addition it performs in an append-only log,
//! one entry per call, in call order. Multiplication is stateless and lives
//! as a free function since it needs no instance.
//!
//! # Overflow policy
//!
//! `add` and `multiply` wrap on overflow (two's complement), matching the
//! behavior of `wrapping_add`/`wrapping_mul`. Callers that need overflow
//! detection use the `checked_*` variants, which return
//! [`ArithmeticError::Overflow`] instead of wrapping.

use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("integer overflow computing {lhs} {op} {rhs}")]
    Overflow { op: char, lhs: i64, rhs: i64 },
}

pub type CalcResult<T> = Result<T, ArithmeticError>;

/// Performs integer addition while keeping a chronological log of every
/// addition, as `"<a> + <b> = <result>"` strings.
///
/// The log never shrinks and is never reordered; its length equals the
/// number of successful addition calls since construction.
#[derive(Debug, Default)]
pub struct Calculator {
    history: Vec<String>,
}

impl Calculator {
    /// Create a calculator with an empty history.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Add two integers, wrapping on overflow, and record the operation.
    ///
    /// Appends exactly one entry to the history per call. The recorded
    /// result is the value actually returned, wrapped if overflow occurred.
    pub fn add(&mut self, a: i64, b: i64) -> i64 {
        let result = a.wrapping_add(b);
        trace!("add: {} + {} = {}", a, b, result);
        self.history.push(format!("{a} + {b} = {result}"));
        result
    }

    /// Add two integers, failing on overflow instead of wrapping.
    ///
    /// The history is appended only on success; a failed call leaves the
    /// log untouched.
    pub fn checked_add(&mut self, a: i64, b: i64) -> CalcResult<i64> {
        let result = a.checked_add(b).ok_or(ArithmeticError::Overflow {
            op: '+',
            lhs: a,
            rhs: b,
        })?;
        trace!("checked_add: {} + {} = {}", a, b, result);
        self.history.push(format!("{a} + {b} = {result}"));
        Ok(result)
    }

    /// Read-only view of the operation log, oldest entry first.
    ///
    /// The borrow is immutable, so callers cannot disturb the append-only
    /// invariant through it.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// Multiply two integers, wrapping on overflow.
///
/// Stateless: no instance, no log entry.
pub fn multiply(x: i64, y: i64) -> i64 {
    x.wrapping_mul(y)
}

/// Multiply two integers, failing on overflow instead of wrapping.
pub fn checked_multiply(x: i64, y: i64) -> CalcResult<i64> {
    x.checked_mul(y).ok_or(ArithmeticError::Overflow {
        op: '*',
        lhs: x,
        rhs: y,
    })
}
