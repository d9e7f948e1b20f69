//! Socket layer: `tiny_http` accept loop bridged onto tokio.
//!
//! `tiny_http` blocks on `recv`, so receiving and responding run in
//! `spawn_blocking`; routing runs as an ordinary task per request.

use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tiny_http::{Header, Request, Response};
use wg_completion::Completer;

use crate::error::ServerError;
use crate::routes::{Api, ApiResponse};

/// Largest request body read; the rest is ignored.
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Stops a running [`Server`] from another task.
#[derive(Clone)]
pub struct ShutdownHandle {
    http: Arc<tiny_http::Server>,
    stopping: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.stopping.store(true, Ordering::SeqCst);
        self.http.unblock();
    }
}

pub struct Server<C> {
    http: Arc<tiny_http::Server>,
    api: Arc<Api<C>>,
    cors_origin: Option<String>,
    stopping: Arc<AtomicBool>,
}

impl<C: Completer + 'static> Server<C> {
    /// Bind `addr` (`host:port`; port 0 picks a free one).
    ///
    /// `cors_origin` is echoed in `Access-Control-Allow-Origin`; `None`
    /// disables CORS headers.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address cannot be bound.
    pub fn bind(addr: &str, api: Api<C>, cors_origin: Option<String>) -> Result<Self, ServerError> {
        let http = tiny_http::Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            http: Arc::new(http),
            api: Arc::new(api),
            cors_origin: cors_origin.filter(|origin| !origin.is_empty()),
            stopping: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The bound address, if it is an IP socket.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http.server_addr().to_ip()
    }

    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            http: Arc::clone(&self.http),
            stopping: Arc::clone(&self.stopping),
        }
    }

    /// Accept requests until [`ShutdownHandle::shutdown`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] if receiving fails for a reason other than
    /// shutdown.
    pub async fn run(self) -> Result<(), ServerError> {
        if let Some(addr) = self.local_addr() {
            tracing::info!(%addr, "listening");
        }
        loop {
            let http = Arc::clone(&self.http);
            let received = tokio::task::spawn_blocking(move || http.recv().map(Incoming::read)).await?;
            let incoming = match received {
                Ok(incoming) => incoming,
                Err(_) if self.stopping.load(Ordering::SeqCst) => break,
                Err(e) => return Err(ServerError::Recv(e)),
            };

            let api = Arc::clone(&self.api);
            let cors_origin = self.cors_origin.clone();
            tokio::spawn(async move {
                let response = api.handle(&incoming.method, &incoming.path, &incoming.body).await;
                tracing::info!(
                    method = %incoming.method,
                    path = %incoming.path,
                    status = response.status,
                    "request served"
                );
                let responded =
                    tokio::task::spawn_blocking(move || incoming.respond(&response, cors_origin.as_deref())).await;
                if let Ok(Err(e)) = responded {
                    tracing::warn!(error = %e, "failed to write response");
                }
            });
        }
        tracing::info!("server stopped");
        Ok(())
    }
}

/// A received request with its body already read.
struct Incoming {
    request: Request,
    method: String,
    path: String,
    has_origin: bool,
    body: Vec<u8>,
}

impl Incoming {
    fn read(mut request: Request) -> Self {
        let mut body = Vec::new();
        if let Err(e) = request.as_reader().take(MAX_BODY_BYTES).read_to_end(&mut body) {
            tracing::warn!(error = %e, "failed to read request body");
            body.clear();
        }
        let has_origin = request
            .headers()
            .iter()
            .any(|h| h.field.equiv("Origin"));
        Self {
            method: request.method().as_str().to_string(),
            path: request.url().to_string(),
            has_origin,
            body,
            request,
        }
    }

    fn respond(self, response: &ApiResponse, cors_origin: Option<&str>) -> std::io::Result<()> {
        let data = response
            .body
            .as_ref()
            .map(|body| body.to_string().into_bytes())
            .unwrap_or_default();
        let mut out = Response::from_data(data).with_status_code(response.status);
        if response.body.is_some() {
            out = with_header(out, "Content-Type", "application/json");
        }
        if let Some(origin) = cors_origin {
            if self.has_origin || self.method.eq_ignore_ascii_case("OPTIONS") {
                out = with_header(out, "Access-Control-Allow-Origin", origin);
                out = with_header(out, "Access-Control-Allow-Methods", "POST, OPTIONS");
                out = with_header(out, "Access-Control-Allow-Headers", "Content-Type");
            }
        }
        self.request.respond(out)
    }
}

fn with_header<R: Read>(response: Response<R>, name: &str, value: &str) -> Response<R> {
    match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
