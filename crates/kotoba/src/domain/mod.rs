//! Domain Layer - Pure business entities and logic

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{Persona, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
pub use errors::DomainError;
pub use value_objects::Backend;
