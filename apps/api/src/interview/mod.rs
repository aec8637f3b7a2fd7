// Question/Feedback Generator
// Implements: question generation, answer analysis, model-output parsing.
// All completion calls go through llm_client — no direct HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
