//! # Tutorlink SDK
//!
//! Client library for the Tutorlink chat relay.
//!
//! The SDK provides:
//!
//! * [`RelayClient`] — typed HTTP access to the relay's chat endpoint.
//! * [`Conversation`] — local conversation history with optimistic turns
//!   that roll back when a call fails.
//! * [`SdkError`] — unified error type for all SDK operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use tutorlink_sdk::{Conversation, RelayClient};
//!
//! # async fn run() -> Result<(), tutorlink_sdk::SdkError> {
//! let client = RelayClient::new("http://localhost:3002");
//! let mut conversation = Conversation::new();
//!
//! let reply = client.send_turn(&mut conversation, "什么是光合作用?").await?;
//! println!("{}", reply.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod conversation;
pub mod error;

pub use client::RelayClient;
pub use conversation::Conversation;
pub use error::SdkError;

// Re-export the wire types for ergonomic usage.
pub use tutorlink_models::{ChatMessage, ChatRequest, CompletionResponse, ErrorResponse, Role};
