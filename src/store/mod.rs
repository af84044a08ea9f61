//! Reactive state containers consumed by the views.
//!
//! Every store keeps its state in a [`StoreCell`]. Starting a request hands out
//! a [`RequestToken`]; a response may only commit while its token is still the
//! latest one, so an older request that settles late can never overwrite the
//! result of a newer one.

use tokio::sync::RwLock;

pub mod detail;
pub mod list;
pub mod statistics;

pub use detail::{DetailState, DetailStore};
pub use list::{ListState, ListStore};
pub use statistics::{StatisticsState, StatisticsStore};

/// User-facing message shown whenever a load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar dados.";

/// Sequence number identifying one dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

struct Slot<S> {
    state: S,
    latest: u64,
}

/// State guarded together with the token of the latest dispatched request.
pub(crate) struct StoreCell<S> {
    inner: RwLock<Slot<S>>,
}

impl<S: Clone> StoreCell<S> {
    pub(crate) fn new(state: S) -> Self {
        Self {
            inner: RwLock::new(Slot { state, latest: 0 }),
        }
    }

    pub(crate) async fn snapshot(&self) -> S {
        self.inner.read().await.state.clone()
    }

    pub(crate) async fn read<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.inner.read().await.state)
    }

    /// Applies `f` and issues a new token in one critical section.
    ///
    /// `f` returns a value derived from the updated state, typically the
    /// request parameters to send.
    pub(crate) async fn begin<T>(&self, f: impl FnOnce(&mut S) -> T) -> (RequestToken, T) {
        let mut slot = self.inner.write().await;
        slot.latest += 1;
        let token = RequestToken(slot.latest);
        let value = f(&mut slot.state);
        (token, value)
    }

    /// Like [`StoreCell::begin`], but `f` may decline by returning `None`, in
    /// which case no token is issued and in-flight requests stay current.
    /// `f` must leave the state untouched when it declines.
    pub(crate) async fn try_begin<T>(
        &self,
        f: impl FnOnce(&mut S) -> Option<T>,
    ) -> Option<(RequestToken, T)> {
        let mut slot = self.inner.write().await;
        let value = f(&mut slot.state)?;
        slot.latest += 1;
        Some((RequestToken(slot.latest), value))
    }

    /// Applies `f` only if `token` is still the latest. Returns whether it did.
    pub(crate) async fn commit(&self, token: RequestToken, f: impl FnOnce(&mut S)) -> bool {
        let mut slot = self.inner.write().await;
        if slot.latest != token.0 {
            return false;
        }
        f(&mut slot.state);
        true
    }
}
