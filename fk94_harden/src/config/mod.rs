//! Compile-time configuration for the hardening engine.

pub mod constants;

pub use constants::compile_time;
