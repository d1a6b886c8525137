pub mod db;
pub mod filter;
pub mod items;
pub mod models;
pub mod queries;
pub mod schema;
pub mod scraped;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
