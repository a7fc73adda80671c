//! Shared CLI infrastructure.
//!
//! The binary lives in `main.rs`; this library exposes the logging setup so
//! it can be reused and tested independently of argument parsing.

pub mod logging;
