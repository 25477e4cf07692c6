//! Hello-world HTTP server.
//!
//! Every request, whatever its method or path, gets `200 OK` with the
//! configured greeting as a plain-text body.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::config::toml_config::ServerConfig;
use crate::utils::error::{DrillError, Result};

#[derive(Debug, Clone)]
struct Greeting(Arc<str>);

/// Build the router: a single fallback handler answers every path.
pub fn build_router(greeting: &str) -> Router {
    Router::new()
        .fallback(hello)
        .with_state(Greeting(Arc::from(greeting)))
}

async fn hello(State(greeting): State<Greeting>, request: Request) -> impl IntoResponse {
    tracing::debug!(method = %request.method(), path = %request.uri().path(), "Request");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        greeting.0.to_string(),
    )
}

/// Handle to a server started with [`spawn`].
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: watch::Sender<bool>,
    task: tokio::task::JoinHandle<Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signal the server to stop and wait for it to drain.
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown_tx.send(true);
        self.task.await.map_err(|e| DrillError::ServerError {
            message: format!("server task failed: {}", e),
        })?
    }
}

async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    let addr = config.bind_address();
    TcpListener::bind(&addr)
        .await
        .map_err(|e| DrillError::ServerError {
            message: format!("failed to bind {}: {}", addr, e),
        })
}

async fn serve_on<F>(listener: TcpListener, greeting: &str, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(greeting))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| DrillError::ServerError {
            message: e.to_string(),
        })
}

/// Bind and serve in a background task. Port 0 picks a free port; the
/// handle reports the address actually bound.
pub async fn spawn(config: &ServerConfig) -> Result<ServerHandle> {
    let listener = bind(config).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", local_addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let greeting = config.greeting.clone();
    let task = tokio::spawn(async move {
        serve_on(listener, &greeting, async move {
            let _ = shutdown_rx.changed().await;
        })
        .await
    });

    Ok(ServerHandle {
        local_addr,
        shutdown_tx,
        task,
    })
}

/// Bind and serve until Ctrl-C.
pub async fn run(config: &ServerConfig) -> Result<()> {
    let listener = bind(config).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Server starting on {}", local_addr);
    println!("Server starting on {}", local_addr);

    serve_on(listener, &config.greeting, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutting down");
    })
    .await
}
