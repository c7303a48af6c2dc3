//! NseKit MCP server: NSE market-data tools over stdio or streamable HTTP.

mod prompts;
mod server;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use nsekit_market_tools::nse::NseFeed;
use nsekit_market_tools::source::NseToolSource;
use nsekit_market_tools::throttle::CallGate;
use rmcp::ServiceExt as _;
use rmcp::transport::stdio;
use server::NseKitServer;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[derive(Debug, Parser)]
#[command(name = "nsekit-mcp-server", version, about = "Expose NSE market-data tools over MCP")]
struct Args {
    /// Transport to serve on.
    #[arg(long, value_enum, default_value = "stdio", env = "NSEKIT_MCP_TRANSPORT")]
    transport: Transport,

    /// Bind address for the streamable HTTP transport.
    #[arg(long, default_value = "127.0.0.1:8980", env = "NSEKIT_MCP_BIND")]
    bind: SocketAddr,

    /// Log filter (tracing env-filter syntax).
    #[arg(long, default_value = "info", env = "NSEKIT_MCP_LOG")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr: on the stdio transport, stdout is the protocol
    // channel.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let feed = Arc::new(NseFeed::new().context("build NSE feed client")?);
    let source = NseToolSource::new(feed, CallGate::default()).context("compile tool catalog")?;
    let handler = NseKitServer::new(source);

    match args.transport {
        Transport::Stdio => serve_stdio(handler).await,
        Transport::Http => serve_http(handler, args.bind).await,
    }
}

async fn serve_stdio(handler: NseKitServer) -> anyhow::Result<()> {
    tracing::info!("serving MCP over stdio");
    let service = handler
        .serve(stdio())
        .await
        .context("initialize stdio transport")?;
    service.waiting().await.context("stdio transport")?;
    Ok(())
}

async fn serve_http(handler: NseKitServer, bind: SocketAddr) -> anyhow::Result<()> {
    use rmcp::transport::streamable_http_server::StreamableHttpService;
    use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;

    let service = StreamableHttpService::new(
        move || Ok(handler.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("bind {bind}"))?;
    tracing::info!(%bind, "serving MCP over streamable HTTP at /mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("http server")?;

    Ok(())
}
