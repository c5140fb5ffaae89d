//! Per-connection request handling.

use std::net::SocketAddr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use log::{debug, error};

use crate::parser::{parse_request_head, HTTP_LINE_BREAK};
use crate::server::builder::render;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::router::Router;

/// Read a request head up to the first empty line or the end of the stream.
///
/// Every line is re-terminated with CRLF, whatever terminator it arrived
/// with. Returns an empty string if the stream ended before any line.
pub async fn read_request_head<R>(reader: &mut R) -> Result<String, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut message = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line).await.map_err(Error::ReadRequest)?;
        if n == 0 {
            break;
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]);
        message.push_str(trimmed);
        message.push_str(HTTP_LINE_BREAK);
        if trimmed.is_empty() {
            break;
        }
    }
    Ok(message)
}

/// Handle a single request on a connection.
///
/// Reads the request head, routes it, renders the response and writes it in
/// one go. On any error nothing more is written. The connection is not
/// closed here; see [`serve_connection`].
pub async fn handle_connection<S>(
    socket: &mut S,
    config: &ServerConfig,
    router: &Router,
) -> Result<(), Error>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let message = {
        let mut reader = BufReader::new(&mut *socket);
        read_request_head(&mut reader).await?
    };
    debug!("Message:\n{message}");

    let request = parse_request_head(&message)?;
    let strategy = router.select(&request.method, &request.path);
    debug!("{} {} -> {strategy:?}", request.method, request.path);

    let response = render(&strategy, &request.path, config).await?;

    socket
        .write_all(&response.to_bytes())
        .await
        .map_err(Error::WriteResponse)?;
    socket.flush().await.map_err(Error::WriteResponse)?;
    Ok(())
}

/// Serve one accepted connection from first read to close.
///
/// Errors are logged with the failing component and never propagate. The
/// connection is always shut down before returning.
pub async fn serve_connection<S>(
    mut socket: S,
    peer: SocketAddr,
    config: &ServerConfig,
    router: &Router,
) where
    S: AsyncRead + AsyncWrite + Unpin,
{
    if let Err(err) = handle_connection(&mut socket, config, router).await {
        error!("{component} ({peer}): {err}", component = err.component());
    }
    if let Err(err) = socket.shutdown().await {
        debug!("Closing connection to {peer}: {err}");
    }
}
