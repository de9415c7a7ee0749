pub mod body;
pub mod gemini;
pub mod sse;
pub mod wire;

pub use gemini::GeminiProvider;
