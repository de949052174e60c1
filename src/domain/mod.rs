//! Equation model, parsing and the digit-wise arithmetic engine.

pub mod answer;
pub mod arithmetic;
pub mod digits;
pub mod equation;
pub mod parser;
pub mod policy;
pub mod ports;
pub mod record;
