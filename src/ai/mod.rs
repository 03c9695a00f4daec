//! Outbound AI proxy: client and wire types for the completion API.

pub mod client;
pub mod dto;

pub use client::{CompletionClient, NO_REPLY};
