//! Domain Entities

mod persona;

pub use persona::{Persona, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
