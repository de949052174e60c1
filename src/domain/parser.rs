use super::digits::DigitStack;
use super::equation::{EquationData, Operator, SignedOperand};
use super::policy::CalculatorConfig;
use crate::error::{CalcError, Result};
use log::debug;

const LEFT_INDEX: usize = 0;
const OPERATOR_INDEX: usize = 1;
const RIGHT_INDEX: usize = 2;
const TOKEN_COUNT: usize = 3;

/// An operand token reduced to its sign and raw digits.
struct ScannedOperand {
    negative: bool,
    /// Most significant first, unpadded.
    digits: Vec<u8>,
}

impl ScannedOperand {
    fn aligned_to(self, other_width: usize) -> SignedOperand {
        SignedOperand {
            width: self.digits.len(),
            digits: DigitStack::aligned(&self.digits, other_width),
            negative: self.negative,
        }
    }
}

/// Turns `<left> <operator> <right>` into a normalized [`EquationData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EquationParser {
    config: CalculatorConfig,
}

impl EquationParser {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Parses a raw line, splitting it on single spaces.
    pub fn parse_line(&self, line: &str) -> Result<EquationData> {
        let tokens: Vec<&str> = line.split(' ').collect();
        self.parse_tokens(&tokens)
    }

    /// Parses an already split line. Exactly three tokens are required.
    pub fn parse_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<EquationData> {
        if tokens.len() != TOKEN_COUNT {
            return Err(CalcError::MalformedLine {
                found: tokens.len(),
            });
        }

        let left = self.scan(tokens[LEFT_INDEX].as_ref())?;
        let operator: Operator = tokens[OPERATOR_INDEX].as_ref().parse()?;
        let right = self.scan(tokens[RIGHT_INDEX].as_ref())?;

        let (left_width, right_width) = (left.digits.len(), right.digits.len());
        let equation = EquationData::new(
            left.aligned_to(right_width),
            operator,
            right.aligned_to(left_width),
        );
        debug!("Parsed equation: {}", equation);

        let equation = equation.normalize(self.config.ordering);
        debug!("Normalized equation: {}", equation);
        Ok(equation)
    }

    /// Reads the sign from the first character and collects every decimal
    /// digit. Other characters are skipped.
    fn scan(&self, token: &str) -> Result<ScannedOperand> {
        let negative = token
            .chars()
            .next()
            .is_some_and(|first| self.config.sign.marks_negative(first));

        let digits: Vec<u8> = token
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|digit| digit as u8)
            .collect();

        if digits.is_empty() {
            return Err(CalcError::EmptyOperand(token.to_string()));
        }

        Ok(ScannedOperand { negative, digits })
    }
}
