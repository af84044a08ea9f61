//! State behind the `/operadoras/:registro` details page.

use std::sync::Arc;

use log::{error, info, warn};

use crate::domain::operadora::{Despesa, Operadora};
use crate::domain::types::OperadoraId;
use crate::repository::OperadoraReader;
use crate::repository::errors::ApiError;
use crate::store::{LOAD_ERROR_MESSAGE, StoreCell};

/// Message shown when the backend does not know the requested operadora.
pub const NOT_FOUND_MESSAGE: &str = "Operadora não encontrada.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    /// Key of the operadora currently shown or being loaded.
    pub id: Option<OperadoraId>,
    pub operadora: Option<Operadora>,
    /// Quarterly expenses, newest first.
    pub despesas: Vec<Despesa>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DetailState {
    /// Sum of all loaded quarterly expenses.
    pub fn total_despesas(&self) -> f64 {
        self.despesas.iter().map(|d| d.valor_despesas).sum()
    }
}

fn user_message(err: &ApiError) -> &'static str {
    if err.is_not_found() {
        NOT_FOUND_MESSAGE
    } else {
        LOAD_ERROR_MESSAGE
    }
}

pub struct DetailStore<R: ?Sized> {
    repo: Arc<R>,
    cell: StoreCell<DetailState>,
}

impl<R> DetailStore<R>
where
    R: OperadoraReader + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            cell: StoreCell::new(DetailState::default()),
        }
    }

    pub async fn snapshot(&self) -> DetailState {
        self.cell.snapshot().await
    }

    /// Loads the operadora and its expenses concurrently.
    ///
    /// Data belonging to a different id is cleared up front; a reload of the
    /// same id keeps what is shown if the new request fails. Each part commits
    /// on its own, so a failed expenses call still shows the operadora.
    pub async fn load(&self, id: OperadoraId) {
        let (token, ()) = self
            .cell
            .begin(|state| {
                if state.id.as_ref() != Some(&id) {
                    state.operadora = None;
                    state.despesas.clear();
                    state.id = Some(id.clone());
                }
                state.loading = true;
                state.error = None;
            })
            .await;

        let (operadora, despesas) = tokio::join!(
            self.repo.get_operadora(id.clone()),
            self.repo.list_despesas(id.clone())
        );

        let mut failure: Option<ApiError> = None;
        let committed = self
            .cell
            .commit(token, |state| {
                match operadora {
                    Ok(operadora) => state.operadora = Some(operadora),
                    Err(err) => failure = Some(err),
                }
                match despesas {
                    Ok(despesas) => state.despesas = despesas,
                    // The operadora lookup error is the more telling one.
                    Err(err) if failure.is_none() => failure = Some(err),
                    Err(_) => {}
                }
                state.error = failure.as_ref().map(|err| user_message(err).to_string());
                state.loading = false;
            })
            .await;

        match (committed, failure) {
            (false, _) => warn!("Discarding stale details response for {id}"),
            (true, Some(err)) => error!("Failed to load operadora {id}: {err}"),
            (true, None) => info!("Loaded details for operadora {id}"),
        }
    }
}
