//! Fake operadoras backend served by actix-web on an ephemeral port.
#![allow(dead_code)]

use std::net::TcpListener;
use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, web};
use healthops_client::models::config::ClientConfig;
use serde::Deserialize;
use serde_json::{Value, json};

/// Lookup key the fake answers only after [`SLOW_DELAY`].
pub const SLOW_ID: &str = "slow";
/// Lookup key answered with a body that does not decode as an operadora.
pub const BROKEN_ID: &str = "broken";
/// Search term that makes the list endpoint fail with HTTP 500.
pub const FAILING_SEARCH: &str = "boom";
pub const SLOW_DELAY: Duration = Duration::from_secs(2);
pub const OPERADORA_COUNT: u64 = 25;

fn cnpj_for(n: u64) -> String {
    format!("{:014}", 10_000_000_000_000u64 + n)
}

fn operadoras() -> Vec<Value> {
    (1..=OPERADORA_COUNT)
        .map(|n| {
            let razao_social = if n % 5 == 0 {
                format!("UNIMED REGIONAL {n}")
            } else {
                format!("OPERADORA SAUDE {n}")
            };
            json!({
                "registro_operadora": format!("{n:06}"),
                "cnpj": cnpj_for(n),
                "razao_social": razao_social,
                "uf": "SP",
                "data_registro_ans": "2001-05-10"
            })
        })
        .collect()
}

fn find(id: &str) -> Option<Value> {
    let key: String = id
        .replace("%2F", "/")
        .replace("%2f", "/")
        .chars()
        .filter(|c| !matches!(c, '.' | '/' | '-'))
        .collect();
    operadoras()
        .into_iter()
        .find(|op| op["registro_operadora"] == key.as_str() || op["cnpj"] == key.as_str())
}

#[derive(Deserialize)]
struct ListParams {
    page: Option<usize>,
    limit: Option<usize>,
    search: Option<String>,
}

async fn list_operadoras(params: web::Query<ListParams>) -> HttpResponse {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).clamp(1, 100);
    let search = params.search.clone().unwrap_or_default().to_lowercase();

    if search == FAILING_SEARCH {
        return HttpResponse::InternalServerError().finish();
    }

    let matches: Vec<Value> = operadoras()
        .into_iter()
        .filter(|op| {
            search.is_empty()
                || op["razao_social"]
                    .as_str()
                    .is_some_and(|name| name.to_lowercase().contains(&search))
                || op["cnpj"].as_str().is_some_and(|cnpj| cnpj.contains(&search))
        })
        .collect();
    let total = matches.len();
    let data: Vec<Value> = matches
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    HttpResponse::Ok().json(json!({
        "data": data,
        "total": total,
        "page": page,
        "limit": limit
    }))
}

async fn get_operadora(id: web::Path<String>) -> HttpResponse {
    let id = id.into_inner();
    if id == SLOW_ID {
        actix_web::rt::time::sleep(SLOW_DELAY).await;
        return HttpResponse::Ok().json(&operadoras()[0]);
    }
    if id == BROKEN_ID {
        return HttpResponse::Ok().json(json!({ "registro_operadora": "abc" }));
    }
    match find(&id) {
        Some(op) => HttpResponse::Ok().json(op),
        None => HttpResponse::NotFound().json(json!({ "detail": "Operadora não encontrada" })),
    }
}

async fn list_despesas(id: web::Path<String>) -> HttpResponse {
    let despesas = match find(&id) {
        Some(op) if op["registro_operadora"] == "000001" => json!([
            { "trimestre": "3T", "ano": 2024, "valor_despesas": "1500.50" },
            { "trimestre": "2T", "ano": 2024, "valor_despesas": 1200 }
        ]),
        _ => json!([]),
    };
    HttpResponse::Ok().json(despesas)
}

async fn statistics() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "total_despesas": "3000.00",
        "media_despesas": "1000.00",
        "top_5_operadoras": [
            { "razao_social": "UNIMED REGIONAL 5", "uf": "SP", "valor_total": "2000.00" },
            { "razao_social": "OPERADORA SAUDE 1", "uf": null, "valor_total": "1000.00" }
        ],
        "despesas_por_uf": [
            { "uf": "SP", "total": "2000.00" },
            { "uf": "N/A", "total": "1000.00" }
        ]
    }))
}

pub struct TestBackend {
    pub base_url: String,
}

impl TestBackend {
    /// Starts the fake backend on the current actix runtime.
    pub fn start() -> Self {
        healthops_client::init_logging();

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let port = listener.local_addr().expect("local address").port();
        let server = HttpServer::new(|| {
            App::new().service(
                web::scope("/api")
                    .route("/operadoras", web::get().to(list_operadoras))
                    .route("/operadoras/{id}", web::get().to(get_operadora))
                    .route("/operadoras/{id}/despesas", web::get().to(list_despesas))
                    .route("/estatisticas", web::get().to(statistics)),
            )
        })
        .workers(1)
        .disable_signals()
        .listen(listener)
        .expect("listen on ephemeral port")
        .run();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{port}/api"),
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.base_url.clone(),
            ..ClientConfig::default()
        }
    }

    pub fn config_with_timeout(&self, timeout: Duration) -> ClientConfig {
        ClientConfig {
            request_timeout_ms: timeout.as_millis() as u64,
            ..self.config()
        }
    }
}

/// Configuration pointing at a port nothing listens on.
pub fn unreachable_config() -> ClientConfig {
    let port = TcpListener::bind("127.0.0.1:0")
        .expect("bind ephemeral port")
        .local_addr()
        .expect("local address")
        .port();
    ClientConfig {
        api_base_url: format!("http://127.0.0.1:{port}/api"),
        ..ClientConfig::default()
    }
}
