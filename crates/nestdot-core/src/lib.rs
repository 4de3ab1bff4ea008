//! # nestdot-core
//!
//! The pure edge encoder: walks a nested [`Value`] and produces an ordered
//! list of `source->destination;` edge strings, ready to be wrapped in a
//! digraph block by a downstream writer.
//!
//! No I/O happens here. The only state is the synthetic-name counters in
//! [`NodeNamer`], and those live for exactly one [`encode`] call.

pub mod encode;
pub mod namer;
pub mod value;

pub use encode::encode;
pub use namer::NodeNamer;
pub use value::{ContainerKind, Shape, Value};

pub use nestdot_error::{Error, ErrorKind, ErrorStatus, Result};
