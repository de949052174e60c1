//! Application layer orchestrating one equation at a time.
//!
//! This module defines the `CalculatorEngine`, which ties the parser and the
//! arithmetic engine to an `AnswerSink`.

pub mod engine;
