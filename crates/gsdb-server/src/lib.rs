//! gsdb admin server library
//!
//! A read-only JSON API over a populated gsdb store: pathway lookups,
//! protein lookups, and set-overlap enrichment queries. All writes go
//! through the `gsdb` CLI; this server never mutates the store.

pub mod api;
pub mod config;
pub mod error;

pub use api::AppState;
pub use config::ServerConfig;
pub use error::{ApiResult, AppError};
