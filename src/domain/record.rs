use serde::Serialize;

/// One line pulled from the line source, split into its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationRecord {
    /// 1-based line number in the source.
    pub line: u64,
    pub tokens: Vec<String>,
}

impl EquationRecord {
    /// The line as it was read.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// One row handed to the answer sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub line: u64,
    pub equation: String,
    pub result: String,
}
