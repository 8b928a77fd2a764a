//! Core domain types for the interop demo.
//!
//! A single record type exercising the return shapes a caller on the other
//! side of a language boundary has to cope with: optional values, varargs,
//! declared failures, and freshly allocated collections. No IO, no async.

mod random;
mod record;

pub use random::{RandomSource, ThreadRandom};
pub use record::{PersonRecord, RISKY_SUCCESS, RecordError, STATIC_GREETING};
