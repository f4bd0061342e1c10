pub mod gemini;

pub use gemini::GeminiTextProvider;
