#![deny(missing_docs)]

//! # Tutorlink Models
//!
//! Shared wire types for the Tutorlink chat relay.
//!
//! ## Request flow
//!
//! ```text
//! client ──ChatRequest──► relay ──CompletionRequest──► provider
//! client ◄──CompletionResponse (verbatim) / ErrorResponse── relay
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`chat`] | Conversation types (`Role`, `ChatMessage`, `ChatRequest`) |
//! | [`completion`] | Provider request and response shapes |
//! | [`error`] | Uniform `{error, details?}` failure payload |

pub mod chat;
pub mod completion;
pub mod error;

// Re-export all public types at crate root for convenience.
// Downstream crates can use `tutorlink_models::ChatMessage` directly.
pub use chat::*;
pub use completion::*;
pub use error::*;
