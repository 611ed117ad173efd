pub mod summarizer_client;

pub use summarizer_client::{HttpSummarizerClient, SummarizerApi};
