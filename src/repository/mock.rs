//! Mock repository implementation for isolating stores in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::operadora::{Despesa, Operadora};
use crate::domain::statistics::Statistics;
use crate::domain::types::OperadoraId;
use crate::dto::api::{ApiResponse, ListQuery, OperadoraPage};
use crate::repository::OperadoraReader;
use crate::repository::errors::ApiResult;

mock! {
    pub Repository {}

    #[async_trait]
    impl OperadoraReader for Repository {
        async fn list_operadoras(&self, query: ListQuery) -> ApiResult<ApiResponse<OperadoraPage>>;
        async fn get_operadora(&self, id: OperadoraId) -> ApiResult<Operadora>;
        async fn list_despesas(&self, id: OperadoraId) -> ApiResult<Vec<Despesa>>;
        async fn get_statistics(&self) -> ApiResult<Statistics>;
    }
}

/// Minimal operadora whose registro and CNPJ are derived from `seq`.
pub fn sample_operadora(seq: u32) -> Operadora {
    Operadora {
        registro_operadora: format!("{seq:06}"),
        cnpj: format!("{seq:014}"),
        razao_social: format!("OPERADORA {seq}"),
        nome_fantasia: None,
        modalidade: None,
        logradouro: None,
        numero: None,
        complemento: None,
        bairro: None,
        cidade: None,
        uf: Some("SP".to_string()),
        cep: None,
        ddd: None,
        telefone: None,
        fax: None,
        endereco_eletronico: None,
        representante: None,
        cargo_representante: None,
        regiao_comercializacao: None,
        data_registro_ans: None,
    }
}

/// Successful list response holding operadoras `seqs` out of `total`.
pub fn sample_page(seqs: std::ops::Range<u32>, total: usize) -> ApiResponse<OperadoraPage> {
    ApiResponse::new(
        200,
        OperadoraPage {
            data: seqs.map(sample_operadora).collect(),
            total,
            page: None,
            limit: None,
        },
    )
}
