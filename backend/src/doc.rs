//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the coin change endpoints, the health probes, and
//! the request/response schemas. The document backs Swagger UI in debug
//! builds and is exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::coin_change::MinimumCoinsResponse;
use crate::inbound::http::submission::{FormSubmission, JsonSubmission};
use utoipa::OpenApi;

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coin change API",
        description = "Minimum number of coins needed to make an amount."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::coin_change::welcome,
        crate::inbound::http::coin_change::coin_change_page,
        crate::inbound::http::coin_change::submit_coin_change,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(JsonSubmission, FormSubmission, MinimumCoinsResponse)),
    tags(
        (name = "coin-change", description = "Minimum coin calculations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
