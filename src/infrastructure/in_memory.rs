use crate::domain::ports::AnswerSink;
use crate::domain::record::AnswerRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory sink that keeps every emitted answer.
///
/// Clones share the same buffer, so a test can hand one clone to the engine
/// and inspect the other.
#[derive(Default, Clone)]
pub struct InMemoryAnswerSink {
    records: Arc<RwLock<Vec<AnswerRecord>>>,
}

impl InMemoryAnswerSink {
    /// Creates a new, empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything emitted so far, in emission order.
    pub async fn records(&self) -> Vec<AnswerRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl AnswerSink for InMemoryAnswerSink {
    async fn emit(&self, record: AnswerRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}
