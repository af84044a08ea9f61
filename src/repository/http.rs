use async_trait::async_trait;

use crate::client::ApiClient;
use crate::domain::operadora::{Despesa, Operadora};
use crate::domain::statistics::Statistics;
use crate::domain::types::OperadoraId;
use crate::dto::api::{ApiResponse, ListQuery, OperadoraPage};
use crate::repository::errors::ApiResult;
use crate::repository::{DESPESAS_PATH, ESTATISTICAS_PATH, OPERADORAS_PATH, OperadoraReader};

/// [`OperadoraReader`] backed by the REST API.
///
/// Pure mapping: no validation, defaulting, or error recovery happens here.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: ApiClient,
}

impl HttpRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl OperadoraReader for HttpRepository {
    async fn list_operadoras(&self, query: ListQuery) -> ApiResult<ApiResponse<OperadoraPage>> {
        self.client
            .get_with_query(&[OPERADORAS_PATH], &query)
            .await
    }

    async fn get_operadora(&self, id: OperadoraId) -> ApiResult<Operadora> {
        self.client
            .get(&[OPERADORAS_PATH, id.as_str()])
            .await
            .map(ApiResponse::into_data)
    }

    async fn list_despesas(&self, id: OperadoraId) -> ApiResult<Vec<Despesa>> {
        self.client
            .get(&[OPERADORAS_PATH, id.as_str(), DESPESAS_PATH])
            .await
            .map(ApiResponse::into_data)
    }

    async fn get_statistics(&self) -> ApiResult<Statistics> {
        self.client
            .get(&[ESTATISTICAS_PATH])
            .await
            .map(ApiResponse::into_data)
    }
}
