//! Client-side core of the operadoras lookup application.
//!
//! Views drive the stores in [`store`], the stores talk to the backend through
//! [`repository::OperadoraReader`], and [`session::Session`] wires everything
//! together from a [`models::config::ClientConfig`].

pub mod client;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod session;
pub mod store;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Installs `env_logger` with an `info` default filter.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::try_init_from_env(env_logger::Env::default().default_filter_or("info"));
}
