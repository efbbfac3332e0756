//! HTTP server lifecycle: bind, run in the background, stop.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use actix_web::{App, HttpServer, dev::ServerHandle, web};
use tracing_actix_web::TracingLogger;

use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// A running HTTP server.
pub struct BlogServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: actix_rt::task::JoinHandle<io::Result<()>>,
}

impl BlogServer {
    /// Bind `addr` and start serving in the background.
    ///
    /// Port 0 binds an ephemeral port; see [`BlogServer::local_addr`].
    /// Must be called from within an actix (tokio) runtime.
    pub fn start(
        addr: impl ToSocketAddrs,
        state: AppState,
        workers: Option<usize>,
    ) -> io::Result<Self> {
        let mut server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(state.clone()))
                .configure(handlers::configure_routes)
        });
        if let Some(workers) = workers {
            server = server.workers(workers);
        }

        let server = server.bind(addr)?;
        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "no address bound"))?;

        let server = server.run();
        let handle = server.handle();
        let task = actix_rt::spawn(server);

        tracing::info!(%addr, "HTTP server listening");

        Ok(Self { addr, handle, task })
    }

    /// The address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL, e.g. `http://127.0.0.1:8080`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Gracefully stop the server and wait for it to exit.
    pub async fn stop(self) -> io::Result<()> {
        tracing::info!(addr = %self.addr, "Stopping HTTP server");
        self.handle.stop(true).await;
        self.wait().await
    }

    /// Run until the server exits (e.g. on SIGINT/SIGTERM).
    pub async fn wait(self) -> io::Result<()> {
        self.task.await.map_err(io::Error::other)?
    }
}
