//! Wire format types for the supported backend APIs

pub mod anthropic;
pub mod openai;
