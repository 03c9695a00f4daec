//! Data Transfer Objects for REST request/response serialization.
//!
//! Request DTOs keep every field optional so that presence checks happen
//! in the service layer and produce the documented messages instead of
//! generic deserialization errors.

pub mod ai_dto;
pub mod common_dto;
pub mod post_dto;

pub use ai_dto::*;
pub use common_dto::*;
pub use post_dto::*;
