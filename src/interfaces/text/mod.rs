//! Plain-text line source and answer output.

pub mod answer_writer;
pub mod equation_reader;
