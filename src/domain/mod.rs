//! Domain layer: request-independent rules.
//!
//! Currently only the echo semantics: JSON truthiness and the length of a
//! value's textual form.

pub mod echo;

pub use echo::{display_text, echo_length, is_truthy};
