//! The HTTP server: shared state, the route table, and the listener
//! lifecycle.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use flotilla_registry::{GameRegistry, RegistryConfig};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::auth::AdminGuard;
use crate::handlers;
use crate::sweep::run_eviction_loop;

/// Shared handles every handler receives.
///
/// One mutex guards the whole registry. Every operation under it is a
/// few map lookups and at most one 100-cell scan, so the critical
/// sections are short and a single lock keeps the two internal maps
/// impossible to observe out of sync.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Mutex<GameRegistry>>,
    pub admin: Arc<AdminGuard>,
}

impl AppState {
    pub fn new(config: RegistryConfig, admin: AdminGuard) -> Self {
        Self {
            registry: Arc::new(Mutex::new(GameRegistry::new(config))),
            admin: Arc::new(admin),
        }
    }
}

/// Builds the full route table.
///
/// Kept separate from the listener so tests can drive the router
/// directly without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/new", post(handlers::create_game))
        .route("/api/join/{id}", post(handlers::join_game))
        .route("/api/{token}/state", get(handlers::game_state))
        .route("/api/{token}/ships", post(handlers::place_ships))
        .route("/api/{token}/info", get(handlers::player_info))
        .route("/admin/games", get(handlers::admin_games))
        .route("/admin/gamestate/{code}", get(handlers::admin_game_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Server lifecycle
// ---------------------------------------------------------------------------

/// Builder for a [`Server`].
pub struct ServerBuilder {
    addr: SocketAddr,
    config: RegistryConfig,
    admin_secret: String,
    sweep_interval: Duration,
}

impl ServerBuilder {
    pub fn new(addr: SocketAddr, admin_secret: String) -> Self {
        Self {
            addr,
            config: RegistryConfig::default(),
            admin_secret,
            sweep_interval: Duration::from_secs(30),
        }
    }

    pub fn registry_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Binds the listener. Port 0 picks a free port; read it back with
    /// [`Server::local_addr`].
    pub async fn bind(self) -> io::Result<Server> {
        let listener = TcpListener::bind(self.addr).await?;
        let state = AppState::new(self.config, AdminGuard::new(&self.admin_secret));
        Ok(Server {
            listener,
            state,
            sweep_interval: self.sweep_interval,
        })
    }
}

/// A bound server, ready to run.
pub struct Server {
    listener: TcpListener,
    state: AppState,
    sweep_interval: Duration,
}

impl Server {
    /// The address the listener actually bound.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until the process is stopped. Also owns the
    /// background eviction task.
    pub async fn run(self) -> io::Result<()> {
        let sweeper = tokio::spawn(run_eviction_loop(
            Arc::clone(&self.state.registry),
            self.sweep_interval,
        ));

        let addr = self.local_addr()?;
        tracing::info!(%addr, "listening");
        let result = axum::serve(self.listener, router(self.state)).await;

        sweeper.abort();
        result
    }
}
