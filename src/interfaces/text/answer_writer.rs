use crate::domain::ports::AnswerSink;
use crate::domain::record::AnswerRecord;
use crate::error::{CalcError, Result};
use async_trait::async_trait;
use clap::ValueEnum;
use std::io::Write;
use tokio::sync::Mutex;

/// Output layout for answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `= <result>` per line.
    #[default]
    Text,
    /// `line,equation,result` with a header row.
    Csv,
    /// One JSON object per line.
    Json,
}

enum Output<W: Write> {
    Plain(W),
    Csv(csv::Writer<W>),
}

/// Writes answers to any `Write` destination (e.g., Stdout, File).
pub struct AnswerWriter<W: Write + Send> {
    output: Mutex<Output<W>>,
    format: OutputFormat,
    echo: bool,
}

impl<W: Write + Send> AnswerWriter<W> {
    /// Creates a new `AnswerWriter`.
    ///
    /// With `echo` set, the text format prints each equation above its
    /// answer and separates entries with a blank line. Other formats always
    /// carry the equation.
    pub fn new(destination: W, format: OutputFormat, echo: bool) -> Self {
        let output = match format {
            OutputFormat::Csv => Output::Csv(csv::Writer::from_writer(destination)),
            OutputFormat::Text | OutputFormat::Json => Output::Plain(destination),
        };
        Self {
            output: Mutex::new(output),
            format,
            echo,
        }
    }

    /// Flushes and hands back the destination.
    pub fn into_inner(self) -> Result<W> {
        match self.output.into_inner() {
            Output::Plain(mut destination) => {
                destination.flush()?;
                Ok(destination)
            }
            Output::Csv(writer) => writer
                .into_inner()
                .map_err(|e| CalcError::Io(e.into_error())),
        }
    }
}

#[async_trait]
impl<W: Write + Send> AnswerSink for AnswerWriter<W> {
    async fn emit(&self, record: AnswerRecord) -> Result<()> {
        let mut output = self.output.lock().await;
        match (&mut *output, self.format) {
            (Output::Csv(writer), _) => writer.serialize(&record)?,
            (Output::Plain(destination), OutputFormat::Json) => {
                serde_json::to_writer(&mut *destination, &record)?;
                writeln!(destination)?;
            }
            (Output::Plain(destination), _) => {
                if self.echo {
                    writeln!(destination, "{}", record.equation)?;
                }
                writeln!(destination, "= {}", record.result)?;
                if self.echo {
                    writeln!(destination)?;
                }
            }
        }
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        let mut output = self.output.lock().await;
        match &mut *output {
            Output::Plain(destination) => destination.flush()?,
            Output::Csv(writer) => writer.flush()?,
        }
        Ok(())
    }
}
