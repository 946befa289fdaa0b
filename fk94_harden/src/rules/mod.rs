//! Hardening rule data model and library.
//!
//! Rules are declarative records gated by OS, risk level and optional
//! answer conditions. The library is loaded once and immutable for the
//! process lifetime; integrity invariants are asserted at load time.

pub(crate) mod builtin;
pub mod error;
pub mod library;
pub mod types;

// Re-export main types
pub use error::{LibraryError, ParseOsError, ParseRiskLevelError};
pub use library::RuleLibrary;
pub use types::{CommandSet, Condition, HardeningRule, Os, RiskLevel};
