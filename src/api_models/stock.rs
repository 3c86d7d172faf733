use serde::{Deserialize, Serialize};

use crate::models::{NewStock, Stock, StockChanges};

/// Request body for create and update. Unknown fields, `stockid` included, are ignored.
#[derive(Debug, Deserialize)]
pub struct StockPayload {
    pub name: String,
    pub price: i64,
    pub company: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockResponse {
    pub stockid: i64,
    pub name: String,
    pub price: i64,
    pub company: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationResponse {
    pub id: i64,
    pub message: String,
}

impl From<Stock> for StockResponse {
    fn from(stock: Stock) -> Self {
        Self {
            stockid: stock.stockid,
            name: stock.name,
            price: stock.price,
            company: stock.company,
        }
    }
}

impl From<StockPayload> for NewStock {
    fn from(payload: StockPayload) -> Self {
        Self {
            name: payload.name,
            price: payload.price,
            company: payload.company,
        }
    }
}

impl From<StockPayload> for StockChanges {
    fn from(payload: StockPayload) -> Self {
        Self {
            name: payload.name,
            price: payload.price,
            company: payload.company,
        }
    }
}

impl MutationResponse {
    pub fn created(id: i64) -> Self {
        Self {
            id,
            message: "Stock created successfully".to_string(),
        }
    }

    pub fn updated(id: i64, affected: usize) -> Self {
        Self {
            id,
            message: format!(
                "Stock updated successfully. Total rows/records affected: {}",
                affected
            ),
        }
    }

    pub fn deleted(id: i64, affected: usize) -> Self {
        Self {
            id,
            message: format!(
                "Stock deleted successfully. Total rows/records affected: {}",
                affected
            ),
        }
    }
}
