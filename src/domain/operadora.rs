use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Cnpj, OperadoraId, Registro, deserialize_amount};

/// A regulated health-insurance operator as published by the backend.
///
/// Identifiers are kept as sent. The backend publishes registry rows with
/// placeholder or malformed values, and one such row must not make a whole
/// page undecodable; use [`Operadora::registro`] and [`Operadora::parsed_cnpj`]
/// for the validated forms.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Operadora {
    pub registro_operadora: String,
    pub cnpj: String,
    pub razao_social: String,
    #[serde(default)]
    pub nome_fantasia: Option<String>,
    #[serde(default)]
    pub modalidade: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub cidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub ddd: Option<i32>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub endereco_eletronico: Option<String>,
    #[serde(default)]
    pub representante: Option<String>,
    #[serde(default)]
    pub cargo_representante: Option<String>,
    #[serde(default)]
    pub regiao_comercializacao: Option<i32>,
    #[serde(default)]
    pub data_registro_ans: Option<NaiveDate>,
}

impl Operadora {
    pub fn registro(&self) -> Option<Registro> {
        Registro::new(self.registro_operadora.as_str()).ok()
    }

    pub fn parsed_cnpj(&self) -> Option<Cnpj> {
        Cnpj::new(self.cnpj.as_str()).ok()
    }

    /// Masked CNPJ, or the raw value when it is not a valid CNPJ.
    pub fn cnpj_formatted(&self) -> String {
        self.parsed_cnpj()
            .map(|cnpj| cnpj.formatted())
            .unwrap_or_else(|| self.cnpj.trim().to_string())
    }

    /// Key used to route to this operadora's details page: the registro, or
    /// the CNPJ when the registro is unusable.
    pub fn id(&self) -> Option<OperadoraId> {
        OperadoraId::new(self.registro_operadora.as_str())
            .or_else(|_| OperadoraId::new(self.cnpj.as_str()))
            .ok()
    }

    /// Trade name when present, falling back to the legal name.
    pub fn display_name(&self) -> &str {
        self.nome_fantasia
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.razao_social)
    }
}

/// Consolidated expenses of an operadora for one quarter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Despesa {
    pub trimestre: String,
    pub ano: i32,
    #[serde(deserialize_with = "deserialize_amount")]
    pub valor_despesas: f64,
}
