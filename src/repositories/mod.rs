use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

pub mod stock;

pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;
