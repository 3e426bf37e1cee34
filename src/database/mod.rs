pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod setup;
pub mod standings;

pub use connection::{Database, DbConn, SqlParam};
pub use models::*;
