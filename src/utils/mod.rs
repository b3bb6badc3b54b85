//! Shared utilities: JWT session tokens, password hashing, validated extractors.

pub mod jwt;
pub mod password;
pub mod validate;
