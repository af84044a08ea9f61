use serde::{Deserialize, Serialize};

use crate::domain::types::deserialize_amount;

/// Aggregated expense figures shown on the statistics dashboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Statistics {
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_despesas: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub media_despesas: f64,
    #[serde(default)]
    pub top_5_operadoras: Vec<DespesaAgregada>,
    #[serde(default)]
    pub despesas_por_uf: Vec<DespesaPorUf>,
}

/// Total expenses of a single operadora across all quarters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DespesaAgregada {
    pub razao_social: String,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub valor_total: f64,
}

/// Expenses summed per federative unit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DespesaPorUf {
    pub uf: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total: f64,
}

impl Statistics {
    /// Share of the overall total spent in `uf`, in the `0.0..=1.0` range.
    pub fn uf_share(&self, uf: &str) -> Option<f64> {
        if self.total_despesas <= 0.0 {
            return None;
        }
        self.despesas_por_uf
            .iter()
            .find(|entry| entry.uf == uf)
            .map(|entry| entry.total / self.total_despesas)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_dashboard_and_computes_share() {
        let stats: Statistics = serde_json::from_value(json!({
            "total_despesas": "1000.00",
            "media_despesas": 250,
            "top_5_operadoras": [
                {"razao_social": "A", "uf": "SP", "valor_total": "600"},
                {"razao_social": "B", "uf": null, "valor_total": 400}
            ],
            "despesas_por_uf": [
                {"uf": "SP", "total": "600"},
                {"uf": "N/A", "total": "400"}
            ]
        }))
        .expect("valid statistics");

        assert_eq!(stats.top_5_operadoras.len(), 2);
        assert_eq!(stats.top_5_operadoras[1].uf, None);
        assert_eq!(stats.uf_share("SP"), Some(0.6));
        assert_eq!(stats.uf_share("RJ"), None);
    }

    #[test]
    fn share_is_undefined_without_expenses() {
        let stats = Statistics {
            total_despesas: 0.0,
            media_despesas: 0.0,
            top_5_operadoras: vec![],
            despesas_por_uf: vec![DespesaPorUf {
                uf: "SP".into(),
                total: 0.0,
            }],
        };

        assert_eq!(stats.uf_share("SP"), None);
    }
}
