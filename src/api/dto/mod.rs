//! Data Transfer Objects for REST request/response serialization.

pub mod echo_dto;
pub mod message_dto;

pub use echo_dto::*;
pub use message_dto::*;
