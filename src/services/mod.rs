pub mod classifier;
pub mod llm;
pub mod prompt;
