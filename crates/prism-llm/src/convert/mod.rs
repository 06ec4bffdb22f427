//! Conversion between gateway types and backend wire formats

pub mod anthropic;
pub mod openai;
