use ids_docs_mcp::{DocsConfig, DocsServer};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for the MCP protocol.
    ids_docs_mcp::tracing::init();

    let config = DocsConfig::from_env();
    if !config.root().is_dir() {
        tracing::warn!(
            "Docs directory {} does not exist; set {} to the generated documentation",
            config.root().display(),
            ids_docs_mcp::config::DOCS_PATH_ENV
        );
    }

    tracing::info!("Starting ids-docs-mcp MCP server");

    let server = DocsServer::new(config);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
