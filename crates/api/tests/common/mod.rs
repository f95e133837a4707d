#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use dbarchitect_core::design::{BusinessRule, ColumnSpec, DesignRecord, DesignRequest, TableSpec};
use dbarchitect_core::error::CoreError;
use dbarchitect_genai::{DesignGenerator, GenAiError};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use dbarchitect_api::config::ServerConfig;
use dbarchitect_api::routes;
use dbarchitect_api::session::SessionStore;
use dbarchitect_api::state::AppState;

/// What the fake generator answers with.
pub enum FakeReply {
    Design(DesignRecord),
    MissingKey,
    InvalidReply(String),
}

/// In-process stand-in for the generation service. Counts calls and
/// remembers the last request it saw.
pub struct FakeGenerator {
    reply: FakeReply,
    calls: AtomicUsize,
    last_request: Mutex<Option<DesignRequest>>,
}

impl FakeGenerator {
    pub fn new(reply: FakeReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<DesignRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl DesignGenerator for FakeGenerator {
    async fn generate(&self, request: &DesignRequest) -> Result<DesignRecord, GenAiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.reply {
            FakeReply::Design(record) => Ok(record.clone()),
            FakeReply::MissingKey => Err(GenAiError::Config(
                "OPENAI_API_KEY is not set".to_string(),
            )),
            FakeReply::InvalidReply(msg) => Err(GenAiError::InvalidReply(CoreError::Validation(
                msg.clone(),
            ))),
        }
    }
}

fn column(name: &str, data_type: &str) -> ColumnSpec {
    ColumnSpec {
        column_name: name.to_string(),
        data_type: data_type.to_string(),
        is_primary_key: false,
        is_foreign_key: false,
        is_nullable: true,
        target_table: None,
        extra_constraint: None,
    }
}

/// A small library design: Authors and Books, one foreign key, two rules.
pub fn library_design() -> DesignRecord {
    let mut author_id = column("AuthorID", "INT");
    author_id.is_primary_key = true;
    author_id.is_nullable = false;

    let mut isbn = column("ISBN", "VARCHAR(20)");
    isbn.is_primary_key = true;
    isbn.is_nullable = false;

    let mut book_author = column("AuthorID", "INT");
    book_author.is_foreign_key = true;
    book_author.is_nullable = false;
    book_author.target_table = Some("Authors".to_string());

    DesignRecord {
        sql_code: "CREATE TABLE Authors (...);".to_string(),
        graphviz_dot: "digraph G {}".to_string(),
        business_rules: vec![
            BusinessRule {
                br_id: "BR-01".to_string(),
                rule_type: "Constraint".to_string(),
                rule_statement: "Every book has exactly one author.".to_string(),
                er_component: Some("Books.AuthorID".to_string()),
                implementation_tip: None,
                rationale: None,
            },
            BusinessRule {
                br_id: "BR-02".to_string(),
                rule_type: "Structural".to_string(),
                rule_statement: "Each ISBN identifies one book.".to_string(),
                er_component: None,
                implementation_tip: Some("Primary key on ISBN".to_string()),
                rationale: None,
            },
        ],
        tables: vec![
            TableSpec {
                table_name: "Authors".to_string(),
                description: Some("Writers".to_string()),
                columns: vec![author_id, column("Name", "VARCHAR(80)")],
            },
            TableSpec {
                table_name: "Books".to_string(),
                description: None,
                columns: vec![isbn, column("Title", "VARCHAR(100)"), book_author],
            },
        ],
        normalization_steps: "1NF, 2NF and 3NF hold.".to_string(),
    }
}

/// A valid design form body.
pub fn library_form(project_name: &str) -> serde_json::Value {
    serde_json::json!({
        "project_name": project_name,
        "user_info": "Jane, librarian",
        "domain": "Library",
        "primary_entity": "Books",
        "constraints": "ISBN unique",
        "advanced_features": "",
        "security_requirements": "",
        "reporting_requirements": "Monthly loans",
        "common_tasks": "Lend books"
    })
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        session_idle_secs: 3600,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and generator.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: SqlitePool, generator: Arc<dyn DesignGenerator>) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        generator,
        sessions: Arc::new(SessionStore::new()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// App wired to a generator that always returns [`library_design`].
pub fn build_library_app(pool: SqlitePool) -> Router {
    build_test_app(pool, FakeGenerator::new(FakeReply::Design(library_design())))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
