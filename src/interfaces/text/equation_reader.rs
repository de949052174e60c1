use crate::domain::record::EquationRecord;
use crate::error::{CalcError, Result};
use std::io::{BufRead, BufReader, Read};

/// Reads equations, one per line, from any text source.
///
/// Lines are split on single spaces and handed on as raw tokens; the token
/// count is checked by the parser so a malformed line keeps its line number.
/// An empty line comes through as a single empty token.
pub struct EquationReader<R: Read> {
    reader: BufReader<R>,
    line: u64,
}

impl<R: Read> EquationReader<R> {
    /// Creates a new `EquationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
            line: 0,
        }
    }

    /// Returns an iterator that lazily reads equation lines.
    ///
    /// I/O failures surface as errors for which [`CalcError::is_fatal`] holds.
    pub fn equations(mut self) -> impl Iterator<Item = Result<EquationRecord>> {
        std::iter::from_fn(move || self.next_record())
    }

    fn next_record(&mut self) -> Option<Result<EquationRecord>> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(CalcError::Io(e))),
        }
        self.line += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let Ok(text) = String::from_utf8(buf) else {
            return Some(Err(CalcError::InvalidUtf8 { line: self.line }));
        };
        Some(Ok(EquationRecord {
            line: self.line,
            tokens: text.split(' ').map(str::to_string).collect(),
        }))
    }
}
