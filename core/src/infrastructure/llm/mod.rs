pub mod chat_completion_client;
pub mod sse;

pub use chat_completion_client::ChatCompletionClient;
