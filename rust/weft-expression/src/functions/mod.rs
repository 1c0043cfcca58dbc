//! The sealed operator set.

pub mod arithmetic;
pub mod compare;
pub mod logic;
pub mod util;

pub use arithmetic::{ABSOLUTE, ADD, DIVIDE, MODULUS, MULTIPLY, NEGATE, SUBTRACT};
pub use compare::{
    EQUALS, GREATER_THAN, GREATER_THAN_OR_EQUAL, LESS_THAN, LESS_THAN_OR_EQUAL, NOTEQUALS,
};
pub use logic::{AND, NOT, OR, TERNARY};
pub use util::{EMPTY, FORMAT};
