use axum::{extract::State, Json};

use crate::api_models::stock::{MutationResponse, StockPayload, StockResponse};
use crate::app::{AppState, DbPool};
use crate::handler::error::AppError;
use crate::handler::extract::{AppJson, AppPath};
use crate::models::{NewStock, StockChanges};
use crate::repositories::{stock, PgPoolConn};

/// Runs `f` on tokio's blocking pool with one pooled connection, so checkout
/// waits and Diesel round trips never stall the async workers.
async fn with_conn<T, F>(pool: DbPool, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&mut PgPoolConn) -> Result<T, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        f(&mut conn)
    })
    .await?
}

/// POST /api/newstock
pub async fn create_stock(
    State(state): State<AppState>,
    AppJson(payload): AppJson<StockPayload>,
) -> Result<Json<MutationResponse>, AppError> {
    let new_stock: NewStock = payload.into();
    let id = with_conn(state.db_pool, move |conn| Ok(stock::insert(conn, &new_stock)?)).await?;
    tracing::info!("Inserted a single record. stockid={}", id);
    Ok(Json(MutationResponse::created(id)))
}

/// GET /api/stock/:id
pub async fn get_stock(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<StockResponse>, AppError> {
    let found = with_conn(state.db_pool, move |conn| Ok(stock::find_by_id(conn, id)?)).await?;
    match found {
        Some(found) => Ok(Json(found.into())),
        None => {
            tracing::debug!("No stock with stockid={}", id);
            Err(AppError::NotFound)
        }
    }
}

/// GET /api/stock
pub async fn list_stocks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockResponse>>, AppError> {
    let items = with_conn(state.db_pool, |conn| Ok(stock::list_all(conn)?)).await?;
    let response: Vec<StockResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// PUT /api/stock/:id
pub async fn update_stock(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<StockPayload>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes: StockChanges = payload.into();
    let affected = with_conn(state.db_pool, move |conn| {
        Ok(stock::update_by_id(conn, id, &changes)?)
    })
    .await?;
    tracing::info!("Total rows/records affected: {} (update stockid={})", affected, id);
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(MutationResponse::updated(id, affected)))
}

/// DELETE /api/deletestock/:id
pub async fn delete_stock(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MutationResponse>, AppError> {
    let affected = with_conn(state.db_pool, move |conn| Ok(stock::delete_by_id(conn, id)?)).await?;
    tracing::info!("Total rows/records affected: {} (delete stockid={})", affected, id);
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(MutationResponse::deleted(id, affected)))
}
