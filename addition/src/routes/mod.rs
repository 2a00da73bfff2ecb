//! API route definitions.

mod arithmetic;

pub use arithmetic::{addition, addition_routes, AdditionParams};
