use std::process::ExitCode;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use eshaman_service::cli;
use eshaman_service::config::Config;
use eshaman_service::schema::create_schema;
use eshaman_service::server;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    // Logging
    let filter = EnvFilter::from_default_env().add_directive("info".parse().unwrap());
    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(true)
        .init();

    let config = Config::from_env();

    // Subcommands run before the server path
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        if args[1] == "smoke-test" {
            return Ok(cli::run_smoke_test(&config).await);
        }
        if args[1] == "help" || args[1] == "--help" || args[1] == "-h" {
            cli::print_usage();
            return Ok(ExitCode::SUCCESS);
        }
    }

    info!(
        host = %config.server_host,
        port = config.server_port,
        "loaded config"
    );

    let schema = create_schema();
    let app = server::router(schema);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 eshaman-service listening on http://{}", addr);
    info!("📊 GraphQL endpoint: http://{}{}", addr, server::GRAPHQL_PATH);
    axum::serve(listener, app).await?;

    Ok(ExitCode::SUCCESS)
}
