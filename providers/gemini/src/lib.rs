pub mod client;

pub use client::GeminiGenerator;
