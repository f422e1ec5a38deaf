//! HTTP inbound adapter exposing the coin change endpoints.

pub mod coin_change;
pub mod error;
pub mod health;
pub mod pages;
pub mod state;
pub mod submission;

pub use error::ApiResult;
