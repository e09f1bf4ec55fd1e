use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    // Target URL for the one-shot smoke test (`smoke-test` subcommand)
    pub graphql_endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);
        let graphql_endpoint = env::var("GRAPHQL_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:3000/api/graphql".to_string());
        Self {
            server_host,
            server_port,
            graphql_endpoint,
        }
    }
}
