use std::cmp::Ordering;
use std::fmt;

/// A stack of decimal digits.
///
/// Digits are pushed most significant first, so popping yields the least
/// significant digit first. This is the order both the carry and the borrow
/// have to travel in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitStack(Vec<u8>);

impl DigitStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the stack for one operand of an equation.
    ///
    /// `digits` are given most significant first. The stack is padded with
    /// leading zeros up to `width` (the digit count of the other operand) and
    /// then with one extra buffer zero that absorbs a final carry.
    pub fn aligned(digits: &[u8], width: usize) -> Self {
        let mut stack = Self(Vec::with_capacity(digits.len().max(width) + 1));
        for _ in digits.len()..width {
            stack.push(0);
        }
        // buffer zero
        stack.push(0);
        for &digit in digits {
            stack.push(digit);
        }
        stack
    }

    pub fn push(&mut self, digit: u8) {
        debug_assert!(digit < 10, "not a decimal digit: {digit}");
        self.0.push(digit);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digits with the leading zeros removed.
    fn significant(&self) -> &[u8] {
        let start = self
            .0
            .iter()
            .position(|&digit| digit != 0)
            .unwrap_or(self.0.len());
        &self.0[start..]
    }

    /// Compares the numeric values of two stacks, ignoring leading zeros.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = (self.significant(), other.significant());
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
    }
}

impl fmt::Display for DigitStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
