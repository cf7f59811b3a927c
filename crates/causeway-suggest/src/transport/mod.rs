//! HTTP transport for the chat-completions protocol.

pub mod http_client;
pub mod protocol;

pub use http_client::{HttpClient, HttpClientConfig};
pub use protocol::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatResponseMessage, Role};
