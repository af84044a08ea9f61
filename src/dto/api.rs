//! Wire shapes of the `/operadoras` collection endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::operadora::Operadora;

/// Query parameters accepted by `GET /operadoras`.
///
/// Values are sent exactly as given; defaults are the caller's concern.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
    /// Free-form filter matched against legal name or CNPJ. May be empty.
    pub search: String,
}

impl ListQuery {
    pub fn new(page: usize, limit: usize, search: impl Into<String>) -> Self {
        Self {
            page,
            limit,
            search: search.into(),
        }
    }
}

/// One page of operadoras plus the server-side count of all matches.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OperadoraPage {
    /// Items in server-defined order.
    pub data: Vec<Operadora>,
    /// Number of matching operadoras across every page.
    pub total: usize,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Successful response envelope: HTTP status plus decoded body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: T) -> Self {
        Self { status, data }
    }

    /// Consume the envelope returning the body.
    pub fn into_data(self) -> T {
        self.data
    }
}
