//! Browser adapters for the Jinro chat.

pub mod assets;
pub mod llm;
pub mod secrets;
