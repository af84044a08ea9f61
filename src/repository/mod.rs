//! Read access to the operadoras backend.
//!
//! [`OperadoraReader`] is the seam between the stores and the transport: the
//! stores only ever see this trait, [`http::HttpRepository`] implements it over
//! [`crate::client::ApiClient`], and tests substitute `mock::MockRepository`.

use async_trait::async_trait;

use crate::domain::operadora::{Despesa, Operadora};
use crate::domain::statistics::Statistics;
use crate::domain::types::OperadoraId;
use crate::dto::api::{ApiResponse, ListQuery, OperadoraPage};

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use errors::{ApiError, ApiResult};
pub use http::HttpRepository;

/// Collection endpoint for operadoras.
pub const OPERADORAS_PATH: &str = "operadoras";
/// Sub-resource listing the expenses of one operadora.
pub const DESPESAS_PATH: &str = "despesas";
/// Aggregate statistics endpoint.
pub const ESTATISTICAS_PATH: &str = "estatisticas";

#[async_trait]
pub trait OperadoraReader: Send + Sync {
    /// `GET /operadoras` with the query passed through unmodified.
    async fn list_operadoras(&self, query: ListQuery) -> ApiResult<ApiResponse<OperadoraPage>>;
    /// `GET /operadoras/{id}` where `id` is a registro or a CNPJ.
    async fn get_operadora(&self, id: OperadoraId) -> ApiResult<Operadora>;
    /// `GET /operadoras/{id}/despesas`.
    async fn list_despesas(&self, id: OperadoraId) -> ApiResult<Vec<Despesa>>;
    /// `GET /estatisticas`.
    async fn get_statistics(&self) -> ApiResult<Statistics>;
}
