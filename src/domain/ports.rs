use super::record::AnswerRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Receives one formatted answer per processed line.
#[async_trait]
pub trait AnswerSink: Send + Sync {
    async fn emit(&self, record: AnswerRecord) -> Result<()>;
    async fn flush(&self) -> Result<()>;
}

pub type AnswerSinkBox = Box<dyn AnswerSink>;
