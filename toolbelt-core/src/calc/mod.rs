//! Calculator — expression buffer plus a restricted arithmetic evaluator.
//!
//! The evaluator is a recursive-descent parser over numbers, `+ - * / %`,
//! unary minus, and parentheses. It never executes anything beyond that
//! grammar.

mod parser;

pub use parser::{eval, CalcError};

/// The calculator's accumulated expression and last computed result.
///
/// Invariant: pushing a numeric token after a computed result starts a fresh
/// expression; pushing an operator continues from that result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    expression: String,
    last_result: Option<String>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Append a keypad token (digit, `.`, operator, or parenthesis).
    pub fn push(&mut self, token: char) {
        if self.last_result.take().is_some() && (token.is_ascii_digit() || token == '.') {
            self.expression.clear();
        }
        self.expression.push(token);
    }

    /// Drop the most recent character.
    pub fn delete_last(&mut self) {
        self.expression.pop();
        self.last_result = None;
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.last_result = None;
    }

    /// Evaluate the accumulated expression.
    ///
    /// On success the result becomes the new expression so the next operator
    /// chains from it. On failure the buffer is cleared, matching the
    /// original calculator's reset-on-error behavior.
    pub fn evaluate(&mut self) -> Result<String, CalcError> {
        match parser::eval(&self.expression) {
            Ok(value) => {
                let display = format_result(value);
                self.expression = display.clone();
                self.last_result = Some(display.clone());
                Ok(display)
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }
}

/// Format a result the way a calculator display would: integral values
/// without a fractional part.
fn format_result(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_all(calc: &mut CalculatorState, tokens: &str) {
        for c in tokens.chars() {
            calc.push(c);
        }
    }

    #[test]
    fn digit_after_result_starts_fresh() {
        let mut calc = CalculatorState::new();
        push_all(&mut calc, "2+3");
        assert_eq!(calc.evaluate().unwrap(), "5");

        calc.push('7');
        assert_eq!(calc.expression(), "7");
    }

    #[test]
    fn operator_after_result_continues() {
        let mut calc = CalculatorState::new();
        push_all(&mut calc, "2+3");
        calc.evaluate().unwrap();

        calc.push('*');
        calc.push('4');
        assert_eq!(calc.expression(), "5*4");
        assert_eq!(calc.evaluate().unwrap(), "20");
    }

    #[test]
    fn delete_last_pops_one_char() {
        let mut calc = CalculatorState::new();
        push_all(&mut calc, "12+");
        calc.delete_last();
        assert_eq!(calc.expression(), "12");
    }

    #[test]
    fn error_clears_the_buffer() {
        let mut calc = CalculatorState::new();
        push_all(&mut calc, "2++");
        assert!(calc.evaluate().is_err());
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.last_result(), None);
    }

    #[test]
    fn fractional_results_keep_their_digits() {
        let mut calc = CalculatorState::new();
        push_all(&mut calc, "7/2");
        assert_eq!(calc.evaluate().unwrap(), "3.5");
    }

    #[test]
    fn integral_results_have_no_fraction() {
        let mut calc = CalculatorState::new();
        push_all(&mut calc, "8/2");
        assert_eq!(calc.evaluate().unwrap(), "4");
    }
}
