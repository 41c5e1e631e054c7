// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod chat;
pub mod result;

pub use chat::{ChatContext, ChatMessage, ChatOverrides, ChatRequest, ChatResponse};
pub use result::{QueryResult, ResultsTable};
