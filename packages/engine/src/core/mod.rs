//! Core - crate-wide plumbing shared by every layer

pub mod error;

pub use error::ConfigError;
