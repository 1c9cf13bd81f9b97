//! Value Objects - Immutable domain values

mod backend;

pub use backend::Backend;
