use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use luckydraw_core::{Decimal, LuckyDrawError};
use luckydraw_game::{SpinError, SpinRequest, SpinResult};
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub(super) struct WalletAmountResponse {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

#[derive(Serialize)]
pub(super) struct LuckyDrawResponse {
    max_number: i64,
    #[serde(with = "rust_decimal::serde::float")]
    wallet_amount: Decimal,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Failure of a request, rendered as `{ "error": ... }`.
#[derive(Debug)]
pub(super) enum ApiError {
    Spin(SpinError),
    Body(JsonRejection),
}

impl From<SpinError> for ApiError {
    fn from(err: SpinError) -> Self {
        ApiError::Spin(err)
    }
}

impl From<LuckyDrawError> for ApiError {
    fn from(err: LuckyDrawError) -> Self {
        ApiError::Spin(SpinError::Core(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Body(rejection) => (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
            ApiError::Spin(SpinError::Validation(msg)) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Spin(err @ SpinError::InsufficientFunds { .. }) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Spin(err) if err.is_configuration() => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Spin(err) => {
                tracing::error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// `GET /wallet-amount`
pub(super) async fn wallet_amount(
    State(state): State<AppState>,
) -> Result<Json<WalletAmountResponse>, ApiError> {
    let amount = state.settlement.ledger().get_balance().await?;
    Ok(Json(WalletAmountResponse { amount }))
}

/// `GET /lucky-draw`
pub(super) async fn lucky_draw(
    State(state): State<AppState>,
) -> Result<Json<LuckyDrawResponse>, ApiError> {
    let wallet_amount = state.settlement.ledger().get_balance().await?;
    Ok(Json(LuckyDrawResponse {
        max_number: state.settlement.game_config().max_number,
        wallet_amount,
    }))
}

/// `POST /lucky-draw/spin`
pub(super) async fn spin(
    State(state): State<AppState>,
    payload: Result<Json<SpinRequest>, JsonRejection>,
) -> Result<Json<SpinResult>, ApiError> {
    let Json(request) = payload.map_err(ApiError::Body)?;
    let result = state.settlement.settle(request).await?;
    Ok(Json(result))
}
