pub mod stocks;

pub use stocks::{NewStock, Stock, StockChanges};
