//! strcalc evaluator
//!
//! Rejects negative values and sums the rest of a parsed sequence, skipping
//! values above the configured bound.

use strcalc_ast::{CalcError, Sequence};
use strcalc_parser::Parser;

/// Values above this are left out of the sum unless configured otherwise
pub const DEFAULT_UPPER_BOUND: i32 = 1000;

/// Evaluation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Largest value that still counts towards the sum
    pub upper_bound: i32,
}

impl CalculatorConfig {
    #[must_use]
    pub const fn with_upper_bound(mut self, upper_bound: i32) -> Self {
        self.upper_bound = upper_bound;
        self
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    #[must_use]
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Parse and sum a delimited string of numbers
    ///
    /// # Errors
    ///
    /// Returns `CalcError` if the header is malformed, the sequence ends with a
    /// delimiter, a token is not an integer, or any value is negative
    pub fn add(&self, input: &str) -> Result<i64, CalcError> {
        if input.is_empty() {
            return Ok(0);
        }

        let sequence = Parser::new(input)?.parse()?;
        self.evaluate(&sequence)
    }

    /// Sum a parsed sequence
    ///
    /// # Errors
    ///
    /// Returns `CalcError::NegativesNotAllowed` listing every negative value
    pub fn evaluate(&self, sequence: &Sequence) -> Result<i64, CalcError> {
        if sequence.is_empty() {
            return Ok(0);
        }
        if let Some(err) = CalcError::negatives(sequence) {
            return Err(err);
        }

        let mut sum = 0i64;
        for value in sequence.iter() {
            if value > self.config.upper_bound {
                tracing::trace!(value, upper_bound = self.config.upper_bound, "value excluded from sum");
                continue;
            }
            sum += i64::from(value);
        }

        tracing::debug!(count = sequence.len(), sum, "evaluated sequence");
        Ok(sum)
    }
}

/// Sum `input` with the default configuration
///
/// # Errors
///
/// See [`Calculator::add`]
pub fn add(input: &str) -> Result<i64, CalcError> {
    Calculator::default().add(input)
}
