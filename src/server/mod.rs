//! Fixture deck server.
//!
//! Serves a static candidate list on `POST /api/initiate-swipe` and keeps
//! the decision maps posted to `POST /api/submit-decisions` in memory. It
//! stands in for a real backend so the HTTP client can be exercised end to
//! end; nothing is persisted.

mod error;
mod routes;

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::model::Profile;

pub use error::ServerError;
pub use routes::{
    build_router, DeckState, RecordedSubmission, CANDIDATES_PATH, DECISIONS_PATH, HEALTH_PATH,
    SUBMISSIONS_PATH,
};

/// Read a JSON profile list from disk.
pub fn load_profiles(path: &Path) -> Result<Vec<Profile>, ServerError> {
    let content = std::fs::read_to_string(path).map_err(|e| ServerError::ProfilesRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ServerError::ProfilesParse {
        path: path.to_path_buf(),
        source: e,
    })
}

pub struct DeckServer {
    /// The bound listener. Populated by bind(), consumed by run().
    listener: Option<TcpListener>,
    state: Arc<DeckState>,
}

impl DeckServer {
    pub fn new(profiles: Vec<Profile>) -> Result<Self, ServerError> {
        Ok(Self {
            listener: None,
            state: Arc::new(DeckState::new(profiles)?),
        })
    }

    /// Bind the listener. Use port 0 to let the OS choose.
    ///
    /// The listener is kept until run() so the port cannot be taken in
    /// between.
    pub async fn bind(&mut self, addr: &str) -> Result<SocketAddr, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.to_string(),
                source: e,
            })?;
        let local = listener.local_addr().map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            source: e,
        })?;

        tracing::info!("Deck server bound to {}", local);
        self.listener = Some(listener);
        Ok(local)
    }

    pub fn state(&self) -> Arc<DeckState> {
        self.state.clone()
    }

    /// Serve until `shutdown` resolves.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    pub async fn run<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self
            .listener
            .ok_or_else(|| ServerError::Internal("bind() must be called before run()".into()))?;

        tracing::info!(
            profiles = self.state.profiles().len(),
            "Starting deck server"
        );

        axum::serve(listener, build_router(self.state))
            .with_graceful_shutdown(shutdown)
            .into_future()
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        tracing::info!("Deck server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
