use std::process::ExitCode;

use crate::client::{verify, HealthClient};
use crate::config::Config;
use crate::error::ServiceError;

/// One-shot smoke test against a running instance: send `{ health }`, expect
/// `{"data":{"health":"OK"}}`. Exit 0 on the canonical response, 1 on any
/// failure. Every outcome is printed; nothing is retried.
pub async fn run_smoke_test(config: &Config) -> ExitCode {
    println!("Testing GraphQL endpoint...");

    let client = HealthClient::new(config.graphql_endpoint.clone());
    let response = match client.send().await {
        Ok(response) => response,
        Err(e) => {
            println!("❌ Request failed: {}", e);
            return ExitCode::from(1);
        }
    };

    println!("Status: {}", response.status.as_u16());

    match verify(&response.body) {
        Ok(envelope) => {
            println!("GraphQL Response: {}", envelope);
            println!("✅ GraphQL health check passed!");
            ExitCode::SUCCESS
        }
        Err(ServiceError::Unhealthy { .. }) => {
            println!("❌ GraphQL health check failed");
            ExitCode::from(1)
        }
        Err(ServiceError::Parse { source, raw }) => {
            println!("❌ Failed to parse response: {}", source);
            println!("Raw response: {}", raw);
            ExitCode::from(1)
        }
        Err(e) => {
            println!("❌ Request failed: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Print usage information for the service binary
pub fn print_usage() {
    println!("eShaman Service");
    println!();
    println!("USAGE:");
    println!("  eshaman-service               start the GraphQL server");
    println!("  eshaman-service smoke-test    one-shot health check against a running server");
    println!("  eshaman-service help          show this message");
    println!();
    println!("ENVIRONMENT:");
    println!("  SERVER_HOST        bind address (default 0.0.0.0)");
    println!("  SERVER_PORT        listen port (default 3000)");
    println!("  GRAPHQL_ENDPOINT   smoke-test target (default http://localhost:3000/api/graphql)");
}
