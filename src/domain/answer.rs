use std::fmt;

/// The normalized result of one equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    negative: bool,
    /// Most significant first, no leading zeros except for zero itself.
    digits: Vec<u8>,
}

impl Answer {
    pub fn new(negative: bool, digits: Vec<u8>) -> Self {
        let is_zero = digits.iter().all(|&digit| digit == 0);
        Self {
            negative: negative && !is_zero,
            digits,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        for &digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
