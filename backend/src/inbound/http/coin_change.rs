//! Coin change API handlers.
//!
//! ```text
//! GET  /             Plain-text welcome
//! GET  /coin-change  HTML calculator form
//! POST /coin-change  Minimum coins for a JSON or form submission
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::pages::{WELCOME_TEXT, coin_change_form, coin_change_result};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::submission::{CoinChangeSubmission, ResponseFormat};

/// JSON response for a solved submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MinimumCoinsResponse {
    /// Fewest coins summing to the amount, or `-1` when impossible.
    #[schema(example = 3)]
    pub minimum_coins: i64,
}

/// Plain-text greeting.
#[utoipa::path(
    get,
    path = "/",
    tags = ["coin-change"],
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(WELCOME_TEXT)
}

/// HTML form for browser users.
#[utoipa::path(
    get,
    path = "/coin-change",
    tags = ["coin-change"],
    responses((status = 200, description = "Calculator form", body = String, content_type = "text/html"))
)]
#[get("/coin-change")]
pub async fn coin_change_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(coin_change_form())
}

/// Compute the minimum number of coins summing to an amount.
///
/// Form posts (`application/x-www-form-urlencoded`) take `coins` as
/// comma-separated text and receive an HTML fragment. Any other request is
/// read as JSON and receives `{"minimumCoins": n}`. An impossible amount
/// yields `-1`.
///
/// # Errors
///
/// - `400 Bad Request` with a plain-text message when the coins or the
///   amount are invalid, or the body cannot be decoded.
#[utoipa::path(
    post,
    path = "/coin-change",
    request_body = crate::inbound::http::submission::JsonSubmission,
    responses(
        (status = 200, description = "Minimum coins computed", body = MinimumCoinsResponse),
        (status = 400, description = "Invalid coins or amount", body = String, content_type = "text/plain")
    ),
    tags = ["coin-change"],
    operation_id = "minimumCoins"
)]
#[post("/coin-change")]
pub async fn submit_coin_change(
    state: web::Data<HttpState>,
    submission: CoinChangeSubmission,
) -> ApiResult<HttpResponse> {
    let CoinChangeSubmission { request, format } = submission;
    let minimum_coins = state.coin_change.minimum_coins(request).await?.to_wire();

    Ok(match format {
        ResponseFormat::Html => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(coin_change_result(minimum_coins)),
        ResponseFormat::Json => HttpResponse::Ok().json(MinimumCoinsResponse { minimum_coins }),
    })
}

#[cfg(test)]
#[path = "coin_change_tests.rs"]
mod tests;
