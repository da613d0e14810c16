//! Handler for the `server` command.

use colored::*;

use mdfence_lib::exit_codes::exit;

/// Handle the server command: start the LSP server.
pub fn handle_server(port: Option<u16>, stdio: bool) {
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("{}: Failed to create Tokio runtime: {}", "Error".red().bold(), e);
        exit::tool_error();
    });

    runtime.block_on(async {
        match port {
            // TCP mode for debugging
            Some(port) if !stdio => {
                if let Err(e) = mdfence_lib::lsp::start_tcp_server(port).await {
                    eprintln!("Failed to start LSP server on port {port}: {e}");
                    exit::tool_error();
                }
            }
            _ => {
                if let Err(e) = mdfence_lib::lsp::start_server().await {
                    eprintln!("Failed to start LSP server: {e}");
                    exit::tool_error();
                }
            }
        }
    });
}
