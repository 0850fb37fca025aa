// src/models.rs
//! Payloads handed to the host, serialized with the field names the web
//! client expects.

pub mod payload;
pub mod response;
pub mod summary;

pub use payload::RoundPayload;
pub use response::{GuessResponse, NewGame};
pub use summary::{CompletedRound, RoundSummary};
