//! The connection listener.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use log::{debug, error, info};

use crate::server::config::ServerConfig;
use crate::server::connection::serve_connection;
use crate::server::error::Error;
use crate::server::router::Router;

/// Accepts connections and hands each one to its own task.
pub struct Listener;

/// A running listener.
///
/// Dropping the handle without calling [`stop`](ListenerHandle::stop) stops
/// the accept loop as well, but does not wait for it.
#[derive(Debug)]
pub struct ListenerHandle {
    local_addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<Connections>,
}

/// The connections still being served when a listener stopped.
///
/// Dropping this leaves the connections running in the background.
#[derive(Debug, Default)]
pub struct Connections {
    tasks: JoinSet<()>,
}

impl Listener {
    /// Bind the configured address and start accepting connections.
    ///
    /// Returns as soon as the socket is bound. Connections are served on the
    /// current Tokio runtime, one task each, without any limit.
    pub async fn start(config: ServerConfig) -> Result<ListenerHandle, Error> {
        let addr = config.addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        let local_addr = listener.local_addr().map_err(|source| Error::Bind { addr, source })?;
        info!("Server listening on http://{local_addr}");

        let router = Arc::new(Router::new(&config));
        let config = Arc::new(config);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        let task = tokio::spawn(Self::accept_loop(listener, shutdown_rx, config, router));

        Ok(ListenerHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }

    async fn accept_loop(
        listener: TcpListener,
        mut shutdown_rx: mpsc::Receiver<()>,
        config: Arc<ServerConfig>,
        router: Arc<Router>,
    ) -> Connections {
        let mut tasks = JoinSet::new();

        loop {
            tokio::select! {
                // Also fires when the handle has been dropped.
                _ = shutdown_rx.recv() => {
                    info!("Shutting down listener");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, peer)) => {
                            Self::spawn_connection(socket, peer, config.clone(), router.clone(), &mut tasks);
                        }
                        Err(e) => Self::handle_accept_error(e).await,
                    }
                }

                // Reap finished connections.
                Some(res) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = res {
                        error!("Connection task failed: {e}");
                    }
                }
            }
        }

        Connections { tasks }
    }

    fn spawn_connection(
        socket: TcpStream,
        peer: SocketAddr,
        config: Arc<ServerConfig>,
        router: Arc<Router>,
        tasks: &mut JoinSet<()>,
    ) {
        debug!("Accepted connection from {peer}");
        tasks.spawn(async move {
            serve_connection(socket, peer, &config, &router).await;
            debug!("Connection to {peer} closed");
        });
    }

    /// Handle a failed accept. The loop always carries on.
    async fn handle_accept_error(e: std::io::Error) {
        let err = Error::Accept(e);
        error!("{component}: {err}", component = err.component());

        // Wait a bit before retrying, so a persistent failure doesn't spin.
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }
}

impl ListenerHandle {
    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and close the listening socket.
    ///
    /// Returns once the socket is closed. Connections already accepted keep
    /// running; the returned [`Connections`] can be used to wait for them.
    pub async fn stop(self) -> Connections {
        let _ = self.shutdown_tx.send(()).await;
        match self.task.await {
            Ok(connections) => connections,
            Err(e) => {
                error!("Listener task failed: {e}");
                Connections::default()
            }
        }
    }
}

impl Connections {
    /// The number of connection tasks not yet collected.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether there are no connection tasks left.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait for every remaining connection to finish.
    pub async fn wait(mut self) {
        while let Some(res) = self.tasks.join_next().await {
            if let Err(e) = res {
                error!("Connection task failed: {e}");
            }
        }
    }
}

impl Drop for Connections {
    fn drop(&mut self) {
        // A dropped JoinSet would abort its tasks.
        self.tasks.detach_all();
    }
}
