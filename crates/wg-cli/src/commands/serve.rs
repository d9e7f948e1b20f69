use anyhow::Context;
use wg_server::{Api, Server};

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `wordgrid serve`: run until Ctrl-C.
pub async fn handle(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let mut server_config = ctx.config.server.clone();
    if let Some(host) = &args.host {
        server_config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }

    if !ctx.config.completion.is_configured() {
        tracing::warn!("completion is not configured; /api/openai will answer with errors");
    }

    let cors_origin = server_config
        .cors_enabled()
        .then(|| server_config.cors_origin.clone());
    let api = Api::new(ctx.store.clone(), ctx.completion.clone());
    let addr = server_config.bind_addr();
    let server = Server::bind(&addr, api, cors_origin).with_context(|| format!("failed to start server on {addr}"))?;

    let shutdown = server.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, shutting down");
            shutdown.shutdown();
        }
    });

    tracing::info!(store = %ctx.store.path().display(), "serving puzzles");
    server.run().await?;
    Ok(())
}
