//! State behind the `/estatisticas` dashboard.

use std::sync::Arc;

use log::{error, info, warn};

use crate::domain::statistics::Statistics;
use crate::repository::OperadoraReader;
use crate::store::{LOAD_ERROR_MESSAGE, StoreCell};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatisticsState {
    pub statistics: Option<Statistics>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct StatisticsStore<R: ?Sized> {
    repo: Arc<R>,
    cell: StoreCell<StatisticsState>,
}

impl<R> StatisticsStore<R>
where
    R: OperadoraReader + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            cell: StoreCell::new(StatisticsState::default()),
        }
    }

    pub async fn snapshot(&self) -> StatisticsState {
        self.cell.snapshot().await
    }

    /// Fetches the aggregate figures, keeping the previous ones on failure.
    pub async fn load(&self) {
        let (token, ()) = self
            .cell
            .begin(|state| {
                state.loading = true;
                state.error = None;
            })
            .await;

        match self.repo.get_statistics().await {
            Ok(statistics) => {
                let committed = self
                    .cell
                    .commit(token, |state| {
                        state.statistics = Some(statistics);
                        state.loading = false;
                    })
                    .await;
                if committed {
                    info!("Loaded expense statistics");
                } else {
                    warn!("Discarding stale statistics response");
                }
            }
            Err(err) => {
                let committed = self
                    .cell
                    .commit(token, |state| {
                        state.error = Some(LOAD_ERROR_MESSAGE.to_string());
                        state.loading = false;
                    })
                    .await;
                if committed {
                    error!("Failed to load statistics: {err}");
                } else {
                    warn!("Ignoring failure of stale statistics request: {err}");
                }
            }
        }
    }
}
