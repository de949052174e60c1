//! Digit-by-digit addition and subtraction over aligned [`DigitStack`]s.

use super::answer::Answer;
use super::digits::DigitStack;
use super::equation::{EquationData, Operator};
use crate::error::{CalcError, Result};
use log::trace;

/// Evaluates a normalized equation.
pub fn evaluate(equation: EquationData) -> Result<Answer> {
    let (left, operator, right, negative_answer) = equation.into_parts();
    let digits = match operator {
        Operator::Add => add(left, right),
        Operator::Sub => subtract(left, right)?,
    };
    Ok(Answer::new(negative_answer, digits))
}

/// `left + right`, most significant digit first.
pub fn add(mut left: DigitStack, mut right: DigitStack) -> Vec<u8> {
    let mut answer = Vec::with_capacity(left.len().max(right.len()));
    let mut carry = false;

    while !(left.is_empty() && right.is_empty()) {
        let mut left_digit = left.pop().unwrap_or(0);
        let right_digit = right.pop().unwrap_or(0);

        if carry {
            left_digit += 1;
            carry = false;
        }

        let mut sum = left_digit + right_digit;
        if sum >= 10 {
            sum -= 10;
            carry = true;
        }

        trace!("add {left_digit} + {right_digit} -> {sum} (carry: {carry})");
        answer.push(sum);
    }

    // Only reachable for stacks built without a buffer zero.
    if carry {
        answer.push(1);
    }

    into_most_significant_first(answer)
}

/// `left - right`, most significant digit first. `left` must not be smaller
/// than `right`.
pub fn subtract(mut left: DigitStack, mut right: DigitStack) -> Result<Vec<u8>> {
    let mut answer = Vec::with_capacity(left.len().max(right.len()));
    let mut borrow = false;

    while !(left.is_empty() && right.is_empty()) {
        let mut left_digit = left.pop().unwrap_or(0) as i8;
        let right_digit = right.pop().unwrap_or(0) as i8;

        if borrow {
            left_digit -= 1;
            borrow = false;
        }

        if left_digit < right_digit {
            left_digit += 10;
            borrow = true;
        }

        let difference = (left_digit - right_digit) as u8;
        trace!("sub {left_digit} - {right_digit} -> {difference} (borrow: {borrow})");
        answer.push(difference);
    }

    if borrow {
        return Err(CalcError::MagnitudeAssumptionViolated);
    }

    Ok(into_most_significant_first(answer))
}

/// Drops the padding zeros off the top of a least-significant-first result
/// and pops the rest into printing order.
fn into_most_significant_first(mut answer: Vec<u8>) -> Vec<u8> {
    while answer.len() > 1 && answer.last() == Some(&0) {
        answer.pop();
    }
    if answer.is_empty() {
        answer.push(0);
    }
    std::iter::from_fn(|| answer.pop()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parser::EquationParser;
    use crate::domain::policy::{CalculatorConfig, OrderingPolicy, SignPolicy};

    fn calc(line: &str) -> Result<String> {
        let equation = EquationParser::default().parse_line(line)?;
        evaluate(equation).map(|answer| answer.to_string())
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(calc("5 + 3").unwrap(), "8");
        assert_eq!(calc("10 - 4").unwrap(), "6");
        assert_eq!(calc("-5 + 3").unwrap(), "-2");
        assert_eq!(calc("3 - 10").unwrap(), "-7");
        assert_eq!(calc("999 + 1").unwrap(), "1000");
        assert_eq!(calc("100 - 99").unwrap(), "1");
    }

    #[test]
    fn test_zero() {
        assert_eq!(calc("0 + 0").unwrap(), "0");
        assert_eq!(calc("0 - 0").unwrap(), "0");
        assert_eq!(calc("000 + 0").unwrap(), "0");
        assert_eq!(calc("42 - 42").unwrap(), "0");
        assert_eq!(calc("-5 + 5").unwrap(), "0");
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(calc("1000 - 999").unwrap(), "1");
        assert_eq!(calc("0007 + 0").unwrap(), "7");
        assert_eq!(calc("10000 - 9997").unwrap(), "3");
    }

    #[test]
    fn test_sign_combinations() {
        assert_eq!(calc("7 + 20").unwrap(), "27");
        assert_eq!(calc("-7 - 20").unwrap(), "-27");
        assert_eq!(calc("-7 + 20").unwrap(), "13");
        assert_eq!(calc("7 - -20").unwrap(), "27");
        assert_eq!(calc("-20 - -7").unwrap(), "-13");
        assert_eq!(calc("-7 - -20").unwrap(), "13");
        assert_eq!(calc("20 + -7").unwrap(), "13");
        assert_eq!(calc("-20 + -7").unwrap(), "-27");
    }

    #[test]
    fn test_equal_width_operands_reordered_by_magnitude() {
        assert_eq!(calc("5 - 9").unwrap(), "-4");
        assert_eq!(calc("-3 + 5").unwrap(), "2");
        assert_eq!(calc("12 - 98").unwrap(), "-86");
    }

    #[test]
    fn test_digit_count_ordering_reports_violation() {
        let parser = EquationParser::new(CalculatorConfig {
            sign: SignPolicy::Strict,
            ordering: OrderingPolicy::DigitCount,
        });
        let equation = parser.parse_line("5 - 9").unwrap();
        assert!(matches!(
            evaluate(equation),
            Err(CalcError::MagnitudeAssumptionViolated)
        ));

        let equation = parser.parse_line("3 - 10").unwrap();
        assert_eq!(evaluate(equation).unwrap().to_string(), "-7");
    }

    #[test]
    fn test_long_carry_chain() {
        let nines = "9".repeat(60);
        let expected = format!("1{}", "0".repeat(60));
        assert_eq!(calc(&format!("{nines} + 1")).unwrap(), expected);
        assert_eq!(calc(&format!("{expected} - 1")).unwrap(), nines);
    }

    #[test]
    fn test_add_without_buffer_keeps_carry() {
        let mut left = DigitStack::new();
        left.push(9);
        let mut right = DigitStack::new();
        right.push(9);
        assert_eq!(add(left, right), vec![1, 8]);
    }

    #[test]
    fn test_subtract_detects_residual_borrow() {
        let left = DigitStack::aligned(&[1], 2);
        let right = DigitStack::aligned(&[2, 0], 1);
        assert!(matches!(
            subtract(left, right),
            Err(CalcError::MagnitudeAssumptionViolated)
        ));
    }
}
