//! Coin change service: the minimum-coin solver behind an HTTP API.
//!
//! - [`domain`] validates denominations and amounts and runs the solver.
//! - [`inbound::http`] decodes JSON and form submissions and renders JSON,
//!   HTML, or plain-text responses.
//! - [`config`] loads listen and validation settings.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
