//! Route table of the application: which view a URL path shows.

use std::fmt::{Display, Formatter};

use crate::domain::types::OperadoraId;

/// Class applied to navigation links pointing at the current route.
pub const ACTIVE_LINK_CLASS: &str = "active";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/operadoras`
    Operadoras,
    /// `/operadoras/:registro`
    OperadoraDetails { registro: String },
    /// `/estatisticas`
    Statistics,
}

impl Route {
    /// Resolves a URL path, ignoring any query string, fragment, or trailing
    /// slash. Returns `None` for paths outside the table.
    pub fn recognize(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["operadoras"] => Some(Route::Operadoras),
            ["operadoras", registro] => Some(Route::OperadoraDetails {
                registro: (*registro).to_string(),
            }),
            ["estatisticas"] => Some(Route::Statistics),
            _ => None,
        }
    }

    /// Details route for the given operadora.
    pub fn details(id: &OperadoraId) -> Self {
        Route::OperadoraDetails {
            registro: id.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Operadoras => "operadoras",
            Route::OperadoraDetails { .. } => "operadora-detalhes",
            Route::Statistics => "estatisticas",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Operadoras => "/operadoras".to_string(),
            Route::OperadoraDetails { registro } => format!("/operadoras/{registro}"),
            Route::Statistics => "/estatisticas".to_string(),
        }
    }

    /// Lookup key bound by the details route.
    pub fn operadora_id(&self) -> Option<OperadoraId> {
        match self {
            Route::OperadoraDetails { registro } => OperadoraId::new(registro.as_str()).ok(),
            _ => None,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// CSS class for a navigation link to `link` while `current` is shown.
pub fn link_class(link: &Route, current: &Route) -> Option<&'static str> {
    (link == current).then_some(ACTIVE_LINK_CLASS)
}
