//! Serde-deserialized JSON configs for the `src/bin` tools.
pub mod frame;
pub mod session;
