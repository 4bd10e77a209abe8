//! # classmix-core
//!
//! Conditional class-name joiner for front-end component code.
//!
//! `classmix` concatenates a variable number of heterogeneous "class name"
//! inputs — strings, numbers, nested lists, key/condition mappings — into one
//! space-separated string. Falsy values are filtered out, nesting is flattened
//! to arbitrary depth, and duplicate names are removed keeping the first
//! occurrence. The joiner is a pure function: no I/O, no shared state, safe to
//! call from any thread.
//!
//! ## Quick start
//!
//! ```rust
//! use classmix_core::{classes, ClassValue};
//!
//! // Variadic macro front door
//! let is_active = true;
//! let attr = classes![
//!     "btn",
//!     is_active.then_some("btn-active"),
//!     ClassValue::map([("btn-disabled", false)]),
//! ];
//! assert_eq!(attr, "btn btn-active");
//!
//! // JSON argument list (e.g. handed over from a template runtime)
//! let attr = classmix_core::join_json(r#"["nav", {"nav-open": true, "nav-pinned": false}]"#).unwrap();
//! assert_eq!(attr, "nav nav-open");
//! ```
//!
//! ## Modules
//!
//! - [`joiner`] — the resolve/flatten/dedup/join algorithm
//! - [`types`] — the `ClassValue` argument union and conversions
//! - [`json`] — JSON bridge (`join_json`) for callers with serialized args
//! - [`error`] — error types for the JSON bridge (`join` itself is total)

pub mod error;
pub mod joiner;
pub mod json;
mod macros;
pub mod types;

pub use error::ClassError;
pub use joiner::join;
pub use json::join_json;
pub use types::{ClassFn, ClassValue};
