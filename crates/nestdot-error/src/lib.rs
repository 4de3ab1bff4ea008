//! # nestdot-error
//!
//! Unified error handling for nestdot.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., InvalidInputKind, RenderingFailed)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use nestdot_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidInputKind, "root must be a mapping or container")
//!         .with_operation("encode")
//!         .with_context("found", "int"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, nestdot_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using nestdot Error
pub type Result<T> = std::result::Result<T, Error>;
