use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Line is not valid UTF-8")]
    InvalidUtf8 { line: u64 },
    #[error("Malformed line: expected 3 space-separated tokens, found {found}")]
    MalformedLine { found: usize },
    #[error("Unknown operator '{0}': expected '+' or '-'")]
    UnknownOperator(String),
    #[error("Operand '{0}' contains no decimal digits")]
    EmptyOperand(String),
    #[error("Subtraction left a borrow past the most significant digit (left operand smaller than right)")]
    MagnitudeAssumptionViolated,
}

impl CalcError {
    /// Whether the error stops the whole run rather than a single line.
    pub fn is_fatal(&self) -> bool {
        match self {
            CalcError::Io(_) => true,
            CalcError::Csv(e) => e.is_io_error(),
            CalcError::Json(e) => e.is_io(),
            _ => false,
        }
    }

    /// Source line the error was raised on, when the error itself knows it.
    pub fn line(&self) -> Option<u64> {
        match self {
            CalcError::InvalidUtf8 { line } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
