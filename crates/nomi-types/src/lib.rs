//! Shared domain types for the Nomi chat client.
//!
//! Wire envelopes for the chat and listing endpoints, the conversation
//! target, the on-disk configuration shape, and the error enums shared by
//! the core ports and their adapters.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod nomi;
