use diesel::prelude::*;
use diesel::OptionalExtension;

use crate::models::{NewStock, Stock, StockChanges};
use crate::repositories::PgPoolConn;
use crate::schema::stocks::dsl::*;

pub fn insert(conn: &mut PgPoolConn, new_stock: &NewStock) -> Result<i64, diesel::result::Error> {
    diesel::insert_into(stocks)
        .values(new_stock)
        .returning(stockid)
        .get_result(conn)
}

pub fn find_by_id(conn: &mut PgPoolConn, id: i64) -> Result<Option<Stock>, diesel::result::Error> {
    stocks
        .find(id)
        .select(Stock::as_select())
        .first(conn)
        .optional()
}

pub fn list_all(conn: &mut PgPoolConn) -> Result<Vec<Stock>, diesel::result::Error> {
    stocks.select(Stock::as_select()).order(stockid.asc()).load(conn)
}

/// Returns the number of rows overwritten: 1 when `id` exists, 0 otherwise.
pub fn update_by_id(
    conn: &mut PgPoolConn,
    id: i64,
    changes: &StockChanges,
) -> Result<usize, diesel::result::Error> {
    diesel::update(stocks.find(id)).set(changes).execute(conn)
}

pub fn delete_by_id(conn: &mut PgPoolConn, id: i64) -> Result<usize, diesel::result::Error> {
    diesel::delete(stocks.find(id)).execute(conn)
}
