use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router, middleware,
    response::Html,
    routing::{get, post, put},
};

use crate::modules::cylinder_tests::use_cases::add_test_record::inbound::http as add_http;
use crate::modules::cylinder_tests::use_cases::list_alerts::inbound::http as alerts_http;
use crate::modules::cylinder_tests::use_cases::list_history::inbound::http as history_http;
use crate::modules::cylinder_tests::use_cases::monthly_stats::inbound::http as stats_http;
use crate::modules::cylinder_tests::use_cases::update_test_record::inbound::http as update_http;
use crate::shell::auth::require_auth;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub const BANNER: &str = "CNG Portal API Running";

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    let private = Router::new()
        .route(
            "/api/tests",
            get(history_http::handle).post(add_http::handle),
        )
        .route("/api/tests/alerts", get(alerts_http::handle))
        .route("/api/tests/stats", get(stats_http::handle))
        .route("/api/tests/{id}", put(update_http::handle))
        .route("/gql", post(graphql))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/graphiql", get(graphiql))
        .merge(private)
        .layer(Extension(schema))
        .with_state(state)
}

async fn banner() -> &'static str {
    BANNER
}

async fn health() -> &'static str {
    "OK"
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
