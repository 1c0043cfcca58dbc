//! Weft Core
//!
//! Shared value model for Weft data-binding expressions: the dynamic
//! `Value` union, the coercion primitives every operator composes, and
//! the list linearizer behind string coercion.

pub mod coerce;
pub mod json;
pub mod linearize;
pub mod values;

pub use values::{ListRef, ObjectRef, OpaqueObject, Value};
