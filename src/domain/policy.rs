use clap::ValueEnum;

/// How an operand token's leading character decides its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SignPolicy {
    /// Only a leading `-` makes an operand negative.
    #[default]
    Strict,
    /// Any leading character that is not a decimal digit makes an operand negative.
    Lenient,
}

impl SignPolicy {
    pub fn marks_negative(self, first: char) -> bool {
        match self {
            SignPolicy::Strict => first == '-',
            SignPolicy::Lenient => !first.is_ascii_digit(),
        }
    }
}

/// How the two operands are ordered before the arithmetic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OrderingPolicy {
    /// Swap when the right operand is numerically larger.
    #[default]
    Magnitude,
    /// Swap only when the right operand has more digits. Equal-length
    /// operands are never reordered, so `5 - 9` fails with a borrow error.
    DigitCount,
}

/// Library-level settings shared by the parser and the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculatorConfig {
    pub sign: SignPolicy,
    pub ordering: OrderingPolicy,
}
