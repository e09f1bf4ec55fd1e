use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{RawQuery, State},
    http::{Method, Request},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};

use crate::page;
use crate::schema::AppSchema;

pub const GRAPHQL_PATH: &str = "/api/graphql";

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

// GET serves two surfaces on the same path: a query string executes exactly
// like the POST form, a bare GET returns the playground.
async fn graphql_get(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    match query.as_deref().filter(|q| !q.is_empty()) {
        Some(qs) => match async_graphql::http::parse_query_string(qs) {
            Ok(request) => GraphQLResponse::from(state.schema.execute(request).await).into_response(),
            Err(e) => {
                let resp = async_graphql::Response::from_errors(vec![
                    async_graphql::ServerError::new(format!("invalid query string: {}", e), None),
                ]);
                GraphQLResponse::from(resp).into_response()
            }
        },
        None => {
            Html(playground_source(GraphQLPlaygroundConfig::new(GRAPHQL_PATH))).into_response()
        }
    }
}

async fn index() -> Html<String> {
    Html(page::render_page(
        r#"<main><h1>eShaman App</h1><p>The GraphQL API is served at <a href="/api/graphql">/api/graphql</a>.</p></main>"#,
    ))
}

pub fn router(schema: AppSchema) -> Router {
    let state = AppState { schema };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(index))
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_handler))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO))
                .make_span_with(|req: &Request<_>| {
                    let id = nanoid::nanoid!(8);
                    tracing::info_span!(
                        "http.request",
                        req.id = %id,
                        http.method = %req.method(),
                        http.path = %req.uri().path(),
                    )
                }),
        )
        .with_state(state)
}
