use diesel::prelude::*;

use crate::schema::stocks;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = stocks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Stock {
    pub stockid: i64,
    pub name: String,
    pub price: i64,
    pub company: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = stocks)]
pub struct NewStock {
    pub name: String,
    pub price: i64,
    pub company: String,
}

/// Full overwrite of every mutable column; `stockid` is never part of a changeset.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = stocks)]
pub struct StockChanges {
    pub name: String,
    pub price: i64,
    pub company: String,
}
