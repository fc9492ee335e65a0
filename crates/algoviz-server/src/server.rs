//! Axum web server exposing the step engine.

use std::net::SocketAddr;
use std::sync::Arc;

use algoviz_steps::{generate, AlgorithmId, AlgorithmKind, Complexity, Run};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::remote::RemoteEngine;
use crate::request::Job;

/// Shared application state.
struct AppState {
    remote: Option<RemoteEngine>,
}

/// Steps server.
pub struct StepsServer {
    state: Arc<AppState>,
}

impl StepsServer {
    /// Create a server from configuration.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let remote = config
            .backend_url
            .as_deref()
            .map(|url| RemoteEngine::new(url, config.remote_timeout))
            .transpose()?;
        if let Some(remote) = &remote {
            info!("Remote engine enabled at {}", remote.endpoint());
        }
        Ok(Self {
            state: Arc::new(AppState { remote }),
        })
    }

    /// Create a server that only uses the local engine.
    pub fn local() -> Self {
        Self {
            state: Arc::new(AppState { remote: None }),
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/api/algorithms", get(algorithms_handler))
            .route("/api/steps", post(steps_handler))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given address.
    pub async fn serve(self, addr: SocketAddr) -> std::result::Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Steps server running on http://{}", listener.local_addr()?);
        axum::serve(listener, self.router()).await
    }
}

async fn health() -> &'static str {
    "OK"
}

/// Catalog entry for one algorithm.
#[derive(Serialize)]
struct AlgorithmInfo {
    id: AlgorithmId,
    kind: AlgorithmKind,
    label: &'static str,
    description: &'static str,
    complexity: Complexity,
}

async fn algorithms_handler() -> Json<Vec<AlgorithmInfo>> {
    Json(
        AlgorithmId::ALL
            .into_iter()
            .map(|id| AlgorithmInfo {
                id,
                kind: id.kind(),
                label: id.label(),
                description: id.description(),
                complexity: id.complexity(),
            })
            .collect(),
    )
}

async fn steps_handler(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let job = match Job::from_body(&body) {
        Ok(job) => job,
        Err(e) => {
            debug!("Rejected steps request: {}", e);
            return e.into_response();
        }
    };

    if let Some(remote) = &state.remote {
        match remote.forward(&job).await {
            Ok((status, body)) => return (status, Json(body)).into_response(),
            Err(e) => warn!("Remote engine failed, using local generator: {}", e),
        }
    }

    let run = run_locally(&job);
    debug!(
        algorithm = %job.algorithm,
        steps = run.steps.len(),
        "Generated steps locally"
    );
    (StatusCode::OK, Json(run)).into_response()
}

fn run_locally(job: &Job) -> Run {
    generate(job.algorithm, &job.engine_input(), &job.options)
}
