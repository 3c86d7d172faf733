use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::utils::config::ServerConfig;
use crate::utils::middleware;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
}

/// Builds the connection pool and waits for its first connection, so a bad
/// `DATABASE_URL` fails at startup rather than on the first request.
pub fn build_pool(cfg: &ServerConfig) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(cfg.database_url.as_str());
    Pool::builder()
        .max_size(cfg.db_pool_max_size)
        .connection_timeout(cfg.db_connection_timeout)
        .build(manager)
}

pub fn build_app_with_pool(db_pool: DbPool) -> Router {
    let state = AppState { db_pool };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
