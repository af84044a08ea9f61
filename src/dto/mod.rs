//! DTOs exchanged with the operadoras REST backend.

pub mod api;
