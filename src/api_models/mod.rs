pub mod stock;

pub use stock::{MutationResponse, StockPayload, StockResponse};
