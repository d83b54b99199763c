//! Macro Tracker
//!
//! An MCP server for calorie thresholds, food logging and macro targets.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use macro_tracker::config::{self, Config};
use macro_tracker::mcp::MacroTrackerService;
use macro_tracker::session::Session;
use macro_tracker::tools::status::{NAME, VERSION};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // A bad override is reported, not fatal
    let filter = config.log_filter().or_else(|err| {
        eprintln!("{}; continuing with {}", err, config::DEFAULT_LOG_DIRECTIVE);
        config::default_log_filter()
    })?;

    // Log to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    eprintln!("{} v{}", NAME, VERSION);
    eprintln!("Starting MCP server on stdio...");

    let catalog = config.load_catalog()?;
    let catalog_source = config.catalog_source.describe();
    eprintln!("Food catalog: {} ({} foods)", catalog_source, catalog.len());

    let service = MacroTrackerService::new(Session::new(catalog), catalog_source);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
