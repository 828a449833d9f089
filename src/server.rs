use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use num_bigint::BigUint;
use num_traits::Num;
use rawrsa::PrivateKey;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, signal};

use crate::error::ServerError;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".parse().unwrap(),
        }
    }
}

#[derive(Clone)]
struct ServerState {
    key: Arc<PrivateKey>,
}

pub struct Server {
    /// Signing key, read-only after construction
    key: Arc<PrivateKey>,
    /// Server configuration
    config: ServerConfig,
}

#[derive(Serialize)]
struct PublicKeyResponse {
    e: String,
    n: String,
}

#[derive(Deserialize)]
struct SignRequest {
    m: String,
}

#[derive(Serialize)]
struct SignResponse {
    s: String,
}

impl Server {
    pub fn new(config: ServerConfig, key: PrivateKey) -> Self {
        Self {
            key: Arc::new(key),
            config,
        }
    }

    pub async fn listen(self) -> Result<(), ServerError> {
        let router = Router::new()
            .route("/healthz", get(healthz_handler))
            .route("/pkey", get(pkey_handler))
            .route("/sign", post(sign_handler))
            .with_state(ServerState { key: self.key });

        let listener =
            TcpListener::bind(self.config.listen_addr)
                .await
                .map_err(|e| ServerError::BindFailed {
                    addr: self.config.listen_addr,
                    source: e,
                })?;
        log::info!("listening on {}", self.config.listen_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::ServeFailed)
    }
}

async fn healthz_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// `GET /pkey`, the public key as lowercase hex text
async fn pkey_handler(State(state): State<ServerState>) -> Json<PublicKeyResponse> {
    let pk = state.key.public_key();
    Json(PublicKeyResponse {
        e: pk.exponent().to_str_radix(16),
        n: pk.modules().to_str_radix(16),
    })
}

/// `POST /sign`, signs the hex message representative `m`
///
/// The transport decodes the hex text into an integer before calling the
/// signing core and encodes the signature back; the core never sees the
/// string format.
async fn sign_handler(State(state): State<ServerState>, Json(req): Json<SignRequest>) -> Response {
    let Ok(m) = BigUint::from_str_radix(req.m.as_str(), 16) else {
        return bad_request("m is not a hex integer");
    };

    match state.key.sign(&m) {
        Ok(s) => Json(SignResponse {
            s: s.to_str_radix(16),
        })
        .into_response(),
        Err(e) => {
            log::warn!("sign request rejected: {e}");
            bad_request(e.to_string().as_str())
        }
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
}

async fn shutdown_signal() {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

    tokio::select! {
        _ = signal::ctrl_c() => {
            log::info!("received Ctrl+C, shutting down gracefully");
        }
        _ = sigterm.recv() => {
            log::info!("received SIGTERM, shutting down gracefully");
        }
    }
}
