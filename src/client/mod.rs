// file: src/client/mod.rs
// description: backend client module exports
// reference: internal module structure

pub mod chat;

pub use chat::{CHAT_PATH, ChatClient, chat_endpoint};
