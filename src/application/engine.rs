use crate::domain::answer::Answer;
use crate::domain::arithmetic;
use crate::domain::parser::EquationParser;
use crate::domain::policy::{CalculatorConfig, OrderingPolicy};
use crate::domain::ports::AnswerSinkBox;
use crate::domain::record::{AnswerRecord, EquationRecord};
use crate::error::{CalcError, Result};
use log::warn;

/// The main entry point for evaluating equation lines.
///
/// `CalculatorEngine` parses each record, runs the digit-wise arithmetic and
/// hands the answer to its sink. Records are processed strictly one at a
/// time; nothing is kept between them.
pub struct CalculatorEngine {
    config: CalculatorConfig,
    parser: EquationParser,
    sink: AnswerSinkBox,
}

impl CalculatorEngine {
    /// Creates a new `CalculatorEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `config` - Sign and ordering policies for the parser.
    /// * `sink` - Where answers are emitted.
    pub fn new(config: CalculatorConfig, sink: AnswerSinkBox) -> Self {
        Self {
            config,
            parser: EquationParser::new(config),
            sink,
        }
    }

    /// Evaluates one record and emits its answer.
    ///
    /// Nothing is emitted when the record fails to parse or evaluate.
    pub async fn process_record(&self, record: EquationRecord) -> Result<Answer> {
        let equation = self.parser.parse_tokens(&record.tokens)?;
        let answer = arithmetic::evaluate(equation).inspect_err(|e| {
            if matches!(e, CalcError::MagnitudeAssumptionViolated)
                && self.config.ordering == OrderingPolicy::DigitCount
            {
                warn!(
                    "Line {}: digit-count ordering left the smaller operand on the left",
                    record.line
                );
            }
        })?;

        self.sink
            .emit(AnswerRecord {
                line: record.line,
                equation: record.text(),
                result: answer.to_string(),
            })
            .await?;
        Ok(answer)
    }

    /// Consumes the engine and flushes its sink.
    pub async fn finish(self) -> Result<()> {
        self.sink.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::SignPolicy;
    use crate::infrastructure::in_memory::InMemoryAnswerSink;

    fn record(line: u64, text: &str) -> EquationRecord {
        EquationRecord {
            line,
            tokens: text.split(' ').map(str::to_string).collect(),
        }
    }

    #[tokio::test]
    async fn test_process_emits_answers_in_order() {
        let sink = InMemoryAnswerSink::new();
        let engine = CalculatorEngine::new(CalculatorConfig::default(), Box::new(sink.clone()));

        let lines = ["5 + 3", "10 - 4", "-5 + 3", "3 - 10", "999 + 1", "100 - 99"];
        for (i, line) in lines.iter().enumerate() {
            engine.process_record(record(i as u64 + 1, line)).await.unwrap();
        }
        engine.finish().await.unwrap();

        let results: Vec<String> = sink.records().await.into_iter().map(|r| r.result).collect();
        assert_eq!(results, vec!["8", "6", "-2", "-7", "1000", "1"]);
    }

    #[tokio::test]
    async fn test_failed_line_emits_nothing() {
        let sink = InMemoryAnswerSink::new();
        let engine = CalculatorEngine::new(CalculatorConfig::default(), Box::new(sink.clone()));

        let result = engine.process_record(record(1, "5 x 3")).await;
        assert!(matches!(result, Err(CalcError::UnknownOperator(_))));

        let answer = engine.process_record(record(2, "5 - 3")).await.unwrap();
        assert_eq!(answer.to_string(), "2");

        let records = sink.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 2);
        assert_eq!(records[0].equation, "5 - 3");
    }

    #[tokio::test]
    async fn test_digit_count_ordering_surfaces_violation() {
        let sink = InMemoryAnswerSink::new();
        let config = CalculatorConfig {
            sign: SignPolicy::Strict,
            ordering: OrderingPolicy::DigitCount,
        };
        let engine = CalculatorEngine::new(config, Box::new(sink.clone()));

        let result = engine.process_record(record(1, "5 - 9")).await;
        assert!(matches!(result, Err(CalcError::MagnitudeAssumptionViolated)));
        assert!(sink.records().await.is_empty());
    }
}
