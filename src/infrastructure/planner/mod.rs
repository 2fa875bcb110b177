//! Plan completion adapters

mod openai;

pub use openai::OpenAiPlanner;
