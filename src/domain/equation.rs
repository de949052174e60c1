use super::digits::DigitStack;
use super::policy::OrderingPolicy;
use crate::error::CalcError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    pub fn flipped(self) -> Self {
        match self {
            Operator::Add => Operator::Sub,
            Operator::Sub => Operator::Add,
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => f.write_str("+"),
            Operator::Sub => f.write_str("-"),
        }
    }
}

/// One side of an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedOperand {
    /// Aligned digits, buffer zero included.
    pub digits: DigitStack,
    pub negative: bool,
    /// Number of decimal digits in the source token.
    pub width: usize,
}

/// A parsed equation, ready for the arithmetic engine once normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationData {
    left: SignedOperand,
    right: SignedOperand,
    operator: Operator,
    negative_answer: bool,
}

impl EquationData {
    pub fn new(left: SignedOperand, operator: Operator, right: SignedOperand) -> Self {
        Self {
            left,
            right,
            operator,
            negative_answer: false,
        }
    }

    pub fn left(&self) -> &SignedOperand {
        &self.left
    }

    pub fn right(&self) -> &SignedOperand {
        &self.right
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn negative_answer(&self) -> bool {
        self.negative_answer
    }

    /// Reduces the equation to its canonical form: the engine only has to
    /// add or subtract two magnitudes, left first, with the sign of the
    /// result carried in `negative_answer`.
    pub fn normalize(mut self, ordering: OrderingPolicy) -> Self {
        let right_is_larger = match ordering {
            OrderingPolicy::Magnitude => {
                self.right.digits.cmp_magnitude(&self.left.digits) == Ordering::Greater
            }
            OrderingPolicy::DigitCount => self.right.width > self.left.width,
        };

        if right_is_larger {
            std::mem::swap(&mut self.left, &mut self.right);
            // a - b == -b + a
            if self.operator == Operator::Sub {
                self.left.negative = !self.left.negative;
                self.operator = Operator::Add;
            }
        }

        match (self.left.negative, self.right.negative) {
            (true, true) => self.negative_answer = true,
            (true, false) => {
                self.negative_answer = true;
                self.operator = self.operator.flipped();
            }
            (false, true) => {
                self.operator = self.operator.flipped();
                self.right.negative = false;
            }
            (false, false) => {}
        }

        self
    }

    /// Splits the equation into the parts the arithmetic engine consumes.
    pub fn into_parts(self) -> (DigitStack, Operator, DigitStack, bool) {
        (
            self.left.digits,
            self.operator,
            self.right.digits,
            self.negative_answer,
        )
    }
}

impl fmt::Display for EquationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |negative: bool| if negative { "-" } else { "" };
        write!(
            f,
            "{}{} {} {}{} (negative answer: {})",
            sign(self.left.negative),
            self.left.digits,
            self.operator,
            sign(self.right.negative),
            self.right.digits,
            self.negative_answer
        )
    }
}
