//! The `webroot-server` binary.
//!
//! Usage: `webroot-server [CONFIG.json]`

use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use log::{error, info};

use webroot_server::{Listener, ServerConfig, ServerError};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("webroot-server: {err}");
    }
}

async fn run() -> Result<(), ServerError> {
    let config = match env::args_os().nth(1) {
        Some(path) => ServerConfig::from_json_file(path)?,
        None => ServerConfig::default(),
    };
    let port = config.port;

    let handle = Listener::start(config).await?;

    println!("To connect to this server via a web browser, try \"http://127.0.0.1:{port}/{{url to retrieve}}\"");
    println!("Press enter to shutdown the web server...");
    wait_for_shutdown().await;

    let connections = handle.stop().await;
    if !connections.is_empty() {
        info!("Waiting for {len} active connections to complete...", len = connections.len());
    }
    connections.wait().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Wait for a line on stdin or Ctrl+C.
///
/// If stdin is closed or unreadable, only Ctrl+C is waited for.
async fn wait_for_shutdown() {
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut line = String::new();
    tokio::select! {
        res = stdin.read_line(&mut line) => {
            match res {
                Ok(0) => {
                    info!("stdin closed, press Ctrl+C to shut down");
                    wait_for_ctrl_c().await;
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Error reading from stdin: {e}");
                    wait_for_ctrl_c().await;
                }
            }
        }
        _ = wait_for_ctrl_c() => {}
    }
}

async fn wait_for_ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => error!("Error setting up Ctrl+C handler: {e}"),
    }
}
