//! Products domain module.
//!
//! This crate contains the CPF validator, the product schema and the in-memory
//! product registry, implemented purely as deterministic domain logic (no HTTP).

pub mod cpf;
pub mod product;
pub mod registry;

pub use cpf::{Cpf, is_valid_cpf};
pub use product::Product;
pub use registry::{ProductAck, ProductRegistry};
