//! Domain entities returned by the operadoras backend.

pub mod operadora;
pub mod statistics;
pub mod types;
