//! Language server for fenced code blocks
//!
//! `mdfence server` runs it over stdio, or on a local TCP port with `--port` when a client
//! should attach to an already running process.

pub mod editor;
pub mod server;
pub mod types;

pub use editor::LspEditor;
pub use server::MdfenceLanguageServer;
pub use types::MdfenceLspConfig;

use anyhow::Result;
use tokio::net::TcpListener;
use tower_lsp::{LspService, Server};

/// Serve one client over stdin/stdout until it exits
pub async fn start_server() -> Result<()> {
    let (service, socket) = LspService::new(MdfenceLanguageServer::new);
    log::info!("mdfence language server listening on stdio");

    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;
    Ok(())
}

/// Accept clients on a local TCP port, each with its own server instance and document store
pub async fn start_tcp_server(port: u16) -> Result<()> {
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    log::info!("mdfence language server listening on {}", listener.local_addr()?);

    loop {
        let (stream, peer) = listener.accept().await?;
        log::debug!("Client connected from {peer}");

        tokio::spawn(async move {
            let (service, socket) = LspService::new(MdfenceLanguageServer::new);
            let (read, write) = tokio::io::split(stream);
            Server::new(read, write, socket).serve(service).await;
            log::debug!("Client {peer} disconnected");
        });
    }
}
