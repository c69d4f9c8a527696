pub mod config;
pub mod dto;
pub mod error;
pub mod mutation;
pub mod query;
pub mod sync;

pub use config::SgtConfig;
pub use dto::sgt::SgtClient;
pub use query::*;
pub use sync::*;

pub use sea_orm;
